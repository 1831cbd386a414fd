//! Flag Source Trait
//!
//! Where the reward string comes from. Implementation is in infrastructure layer.

/// Flag source trait
#[trait_variant::make(FlagSource: Send)]
pub trait LocalFlagSource {
    /// Flag to reveal on a successful bypass
    ///
    /// Cannot fail: implementations fall back to a default value.
    async fn flag(&self) -> String;
}
