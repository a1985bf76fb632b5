// SPDX-License-Identifier: MPL-2.0
//! Overlay domain types.
//!
//! Pure data describing compositional guides drawn over the camera
//! preview. Nothing here touches rendering; the host application maps
//! each [`OverlayKind`] to its drawing component.

pub mod definition;
pub mod newtypes;
pub mod registry;

// Re-export commonly used types
pub use definition::{OverlayDefinition, OverlayKind, RectPct};
pub use newtypes::SpanFraction;
pub use registry::{find_by_id, RegistryEntry, OVERLAY_REGISTRY};
