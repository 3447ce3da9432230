//! Card scoring options.

/// Options for [`Card::value`](crate::Card::value).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::ValueOptions;
///
/// let options = ValueOptions::default()
///     .with_ace_high(true)
///     .with_face_cards_same(true);
/// assert!(options.ace_high);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueOptions {
    /// Whether an ace scores 11 instead of 1.
    pub ace_high: bool,
    /// Whether jacks, queens and kings all score 10.
    pub face_cards_same: bool,
}

impl ValueOptions {
    /// Sets whether an ace scores 11.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::ValueOptions;
    ///
    /// let options = ValueOptions::default().with_ace_high(true);
    /// assert_eq!(options.ace_high, true);
    /// ```
    #[must_use]
    pub const fn with_ace_high(mut self, ace_high: bool) -> Self {
        self.ace_high = ace_high;
        self
    }

    /// Sets whether face cards all score 10.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::ValueOptions;
    ///
    /// let options = ValueOptions::default().with_face_cards_same(true);
    /// assert_eq!(options.face_cards_same, true);
    /// ```
    #[must_use]
    pub const fn with_face_cards_same(mut self, same: bool) -> Self {
        self.face_cards_same = same;
        self
    }
}
