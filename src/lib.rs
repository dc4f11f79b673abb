pub mod config;
pub mod error;
pub mod field;
pub mod filter;
pub mod key;
pub mod mask;
pub mod normalize;
pub mod pattern;
pub mod resolver;
pub mod traits;

pub use crate::config::{Config, ConfigBuilder, DecimalPlaces, DecimalSign};
pub use crate::error::{INVALID_BOUNDS_MESSAGE, INVALID_HOST_KIND_MESSAGE, MaskError};
pub use crate::field::{FieldState, TextField};
pub use crate::filter::should_accept;
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::mask::{MaskSnapshot, NumberMask, NumberMaskBuilder, Verdict};
pub use crate::normalize::normalize;
pub use crate::pattern::{PatternKind, PatternSet};
pub use crate::resolver::{ResolvedConfig, Validation};
#[cfg(feature = "clipboard")]
pub use crate::traits::SystemClipboard;
pub use crate::traits::{Clipboard, FieldHost};
