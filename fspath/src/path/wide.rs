//! UTF-16 interchange for hosts whose native APIs take wide strings.

use crate::error::{Error, Result};
use crate::path::style::PathStyle;
use crate::path::value::FsPath;

impl FsPath {
    /// Serialize in `style` and encode as UTF-16.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{FsPath, PathStyle};
    ///
    /// let path = FsPath::with_style(r"C:\temp", PathStyle::Windows);
    /// let wide = path.to_wide(PathStyle::Windows);
    /// assert_eq!(String::from_utf16(&wide).unwrap(), r"C:\temp");
    /// ```
    #[must_use]
    pub fn to_wide(&self, style: PathStyle) -> Vec<u16> {
        self.to_style_string(style).encode_utf16().collect()
    }

    /// Decode UTF-16 and parse the result in `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `wide` is not valid UTF-16 (for
    /// example an unpaired surrogate).
    pub fn from_wide(wide: &[u16], style: PathStyle) -> Result<Self> {
        let decoded = String::from_utf16(wide).map_err(|e| Error::Validation {
            field: "path".to_string(),
            message: format!("invalid UTF-16: {e}"),
        })?;
        Ok(Self::with_style(&decoded, style))
    }
}
