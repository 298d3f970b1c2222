//! nexus-qr: presentation metadata for membership keys.
//!
//! Validates a key through `nexus-codec` and turns the result into what a QR
//! renderer needs: the payload (key, validation URL, tier) and styling hints
//! (style name, main color, pattern complexity). No image is produced here.
//!
//! ```
//! let metadata = nexus_qr::describe("GOD4E4∞CQ7X#∞1830F∞K2P!AS∞33").unwrap();
//! assert_eq!(metadata.visual_parameters.main_color, "#FF006E");
//! assert_eq!(metadata.visual_parameters.pattern_complexity, 6);
//! ```

pub mod config;
pub mod metadata;
pub mod palette;
pub mod presenter;

pub use config::PresentationConfig;
pub use metadata::{PresentationMetadata, QrCodeData, QrResponse, VisualParameters};
pub use presenter::{PresentationError, Presenter, describe};
