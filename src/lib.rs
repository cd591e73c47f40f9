//! Typed payloads of the Discord REST and gateway APIs.
//!
//! Each API version is a module of its own, gated behind a feature of the
//! same name: [`v8`] declares every shape, and [`v9`] reuses the shapes that
//! didn't change and extends the ones that did. Nothing here performs I/O;
//! the types only describe what goes over the wire and how it maps to serde.
//!
//! Enumerations and tagged unions keep values they don't know in an
//! `Unknown` variant instead of failing, so payloads from newer API
//! revisions still parse.
//!
//! ```
//! # #[cfg(feature = "v9")] {
//! use discord_payloads::v9::interactions::{Interaction, MessageComponentInteractionData};
//!
//! let interaction: Interaction = serde_json::from_str(r#"{
//!     "id": "1",
//!     "application_id": "2",
//!     "type": 3,
//!     "token": "token",
//!     "version": 1,
//!     "locale": "en-US",
//!     "user": {"id": "3", "username": "ferris", "discriminator": "0", "avatar": null},
//!     "data": {"component_type": 2, "custom_id": "btn_ok"}
//! }"#)?;
//!
//! if let Interaction::MessageComponent(component) = &interaction {
//!     if let MessageComponentInteractionData::Button(button) = &component.data {
//!         assert_eq!(button.custom_id, "btn_ok");
//!     }
//! }
//! # }
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod id;
pub mod util;

#[cfg(feature = "v8")]
pub mod ext;
#[cfg(feature = "v8")]
pub mod v8;
#[cfg(feature = "v9")]
pub mod v9;
