/// The move a Nelder–Mead iteration made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The worst vertex was replaced by its reflection through the centroid.
    Reflect,

    /// The worst vertex was replaced by an expanded reflection.
    Expand,

    /// The worst vertex was pulled halfway toward the centroid.
    Contract,

    /// Every vertex but the best was pulled halfway toward the best.
    Shrink,
}
