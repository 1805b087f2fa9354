pub trait Acknowledger: Send + Sync {
    /// Blocks until the user acknowledges `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn acknowledge(&self, prompt: &str) -> std::io::Result<()>;
}

impl<T: Acknowledger + ?Sized> Acknowledger for Box<T> {
    fn acknowledge(&self, prompt: &str) -> std::io::Result<()> {
        (**self).acknowledge(prompt)
    }
}
