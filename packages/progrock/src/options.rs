use std::borrow::Cow;

/// Options applied when a [`ProgressState`](crate::ProgressState) is rendered as text
///
/// Use [`RenderOptions::builder`] to create options that differ from
/// [`RenderOptions::DEFAULT`] in some fields, or [`to_builder`](Self::to_builder)
/// to derive from existing options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RenderOptions {
    /// Number of characters in the bar. Negative is treated as 0
    pub(crate) length: i64,
    /// The template, see the [crate-level docs](crate#rendering) for tokens
    pub(crate) format: Cow<'static, str>,
    /// Character for a completed chunk of the bar
    pub(crate) complete: char,
    /// Character for an incomplete chunk of the bar
    pub(crate) incomplete: char,
}

impl RenderOptions {
    /// The default options:
    ///
    /// - Length: `50`
    /// - Format: `":progress/:total   :percent% [:bar]  ETA: :remaining"`
    /// - Complete: `'='`
    /// - Incomplete: `' '`
    pub const DEFAULT: Self = Self {
        length: 50,
        format: Cow::Borrowed(":progress/:total   :percent% [:bar]  ETA: :remaining"),
        complete: '=',
        incomplete: ' ',
    };

    /// Start building options with all fields unset.
    /// Unset fields take the value from [`RenderOptions::DEFAULT`]
    /// when built
    #[inline(always)]
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Start building options with all fields copied from `self`
    ///
    /// ```rust
    /// # use progrock::RenderOptions;
    /// let hashes = RenderOptions::builder().complete('#').build();
    /// let short = hashes.to_builder().length(10).build();
    /// assert_eq!(short.complete_char(), '#');
    /// assert_eq!(short.length(), 10);
    /// ```
    #[inline(always)]
    pub fn to_builder(&self) -> RenderOptionsBuilder {
        RenderOptionsBuilder::from(self)
    }

    /// Number of characters in the bar
    #[inline(always)]
    pub fn length(&self) -> i64 {
        self.length
    }

    /// The format template
    #[inline(always)]
    pub fn format_str(&self) -> &str {
        &self.format
    }

    /// Character for a completed chunk
    #[inline(always)]
    pub fn complete_char(&self) -> char {
        self.complete
    }

    /// Character for an incomplete chunk
    #[inline(always)]
    pub fn incomplete_char(&self) -> char {
        self.incomplete
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`RenderOptions`]
///
/// No value is validated. For example, a negative length is accepted and
/// renders as an empty bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RenderOptionsBuilder {
    length: Option<i64>,
    format: Option<Cow<'static, str>>,
    complete: Option<char>,
    incomplete: Option<char>,
}

impl RenderOptionsBuilder {
    /// Set the length of the bar
    #[inline(always)]
    #[must_use]
    pub fn length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the format template.
    ///
    /// See the [crate-level docs](crate#rendering) for the tokens
    /// that are substituted
    #[inline(always)]
    #[must_use]
    pub fn format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the character to use for a completed chunk
    #[inline(always)]
    #[must_use]
    pub fn complete(mut self, complete: char) -> Self {
        self.complete = Some(complete);
        self
    }

    /// Set the character to use for an incomplete chunk
    #[inline(always)]
    #[must_use]
    pub fn incomplete(mut self, incomplete: char) -> Self {
        self.incomplete = Some(incomplete);
        self
    }

    /// Overlay the fields set in `other` on top of `self`
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            length: other.length.or(self.length),
            format: other.format.or(self.format),
            complete: other.complete.or(self.complete),
            incomplete: other.incomplete.or(self.incomplete),
        }
    }

    /// Build the options, filling unset fields from [`RenderOptions::DEFAULT`]
    pub fn build(self) -> RenderOptions {
        let default = RenderOptions::DEFAULT;
        RenderOptions {
            length: self.length.unwrap_or(default.length),
            format: self.format.unwrap_or(default.format),
            complete: self.complete.unwrap_or(default.complete),
            incomplete: self.incomplete.unwrap_or(default.incomplete),
        }
    }
}

impl From<&RenderOptions> for RenderOptionsBuilder {
    fn from(options: &RenderOptions) -> Self {
        Self {
            length: Some(options.length),
            format: Some(options.format.clone()),
            complete: Some(options.complete),
            incomplete: Some(options.incomplete),
        }
    }
}

impl From<RenderOptions> for RenderOptionsBuilder {
    fn from(options: RenderOptions) -> Self {
        Self {
            length: Some(options.length),
            format: Some(options.format),
            complete: Some(options.complete),
            incomplete: Some(options.incomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_is_default() {
        assert_eq!(RenderOptions::builder().build(), RenderOptions::DEFAULT);
        assert_eq!(RenderOptions::default(), RenderOptions::DEFAULT);
    }

    #[test]
    fn test_unset_fields_take_default() {
        let options = RenderOptions::builder().length(10).format("(:bar)").build();
        assert_eq!(options.length(), 10);
        assert_eq!(options.format_str(), "(:bar)");
        assert_eq!(options.complete_char(), '=');
        assert_eq!(options.incomplete_char(), ' ');
    }

    #[test]
    fn test_builder_from_existing() {
        let base = RenderOptions::builder()
            .complete('#')
            .incomplete('-')
            .length(20)
            .build();
        let derived = base.to_builder().format("[:bar]").build();
        assert_eq!(derived.complete_char(), '#');
        assert_eq!(derived.incomplete_char(), '-');
        assert_eq!(derived.length(), 20);
        assert_eq!(derived.format_str(), "[:bar]");
        // the source is not affected
        assert_eq!(base.format_str(), RenderOptions::DEFAULT.format_str());
        assert_eq!(RenderOptionsBuilder::from(base.clone()).build(), base);
    }

    #[test]
    fn test_no_validation() {
        let options = RenderOptions::builder().length(-5).format("").build();
        assert_eq!(options.length(), -5);
        assert_eq!(options.format_str(), "");
    }

    #[test]
    fn test_merge_prefers_other() {
        let file = RenderOptions::builder().length(10).complete('#');
        let flags = RenderOptions::builder().length(30);
        let options = file.merge(flags).build();
        assert_eq!(options.length(), 30);
        assert_eq!(options.complete_char(), '#');
        assert_eq!(options.incomplete_char(), ' ');
    }
}
