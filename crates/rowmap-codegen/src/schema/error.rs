/// Collects the errors found while parsing an entity so that one
/// compilation reports every bad field, not just the first.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    combined: Option<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.combined = Some(match self.combined.take() {
            Some(mut combined) => {
                combined.combine(err);
                combined
            }
            None => err,
        });
    }

    /// Fails with every collected error, each at its own span.
    pub(crate) fn finish(self) -> syn::Result<()> {
        self.combined.map_or(Ok(()), Err)
    }
}
