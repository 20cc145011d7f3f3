// this module provides the rendering plumbing shared by all IRI components

use std::fmt;

/// Internal rendering trait behind `Display` and `to_uri_string`.
///
/// `ascii = false` produces the IRI (UTF-8) form,
/// `ascii = true` the URI (pure ASCII) form.
pub(crate) trait WriteForm {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result;
}

/// Implement `Display` (IRI form) and `to_uri_string` (URI form)
/// on top of a [`WriteForm`] implementation.
macro_rules! impl_display {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::WriteForm;
                self.write_form(f, false)
            }
        }
        impl $ty {
            /// Return the pure-ASCII (URI) form of this value,
            /// with every non-ASCII character percent-encoded.
            ///
            /// The UTF-8 (IRI) form is produced by the `Display` implementation.
            pub fn to_uri_string(&self) -> String {
                use $crate::WriteForm;
                struct AsUri<'a>(&'a $ty);
                impl std::fmt::Display for AsUri<'_> {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        self.0.write_form(f, true)
                    }
                }
                AsUri(self).to_string()
            }
        }
    };
}

pub(crate) use impl_display;
