#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The `contact` field was missing or blank after trimming.
    /// Without it there is no way to reply to the order.
    #[error("contact required")]
    ContactRequired,
}
