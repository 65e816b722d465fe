//! Integration tests for roundcolor-types.

use roundcolor_types::constants::{palette_size, MIN_COLOR};
use roundcolor_types::{ColoringError, VertexId, UNCOMMITTED};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn vertex_id_index() {
    let id = VertexId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn vertex_id_display() {
    assert_eq!(VertexId(7).to_string(), "v7");
}

#[test]
fn vertex_ids_are_serializable() {
    let id = VertexId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: VertexId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

#[test]
fn uncommitted_is_below_color_range() {
    assert!(UNCOMMITTED < MIN_COLOR);
    assert_eq!(palette_size(0), 1);
    assert_eq!(palette_size(4), 5);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = ColoringError::InvalidGraph("self-loop at vertex 3".into());
    assert!(err.to_string().contains("self-loop"));
}

#[test]
fn empty_palette_display() {
    let err = ColoringError::EmptyPalette { vertex: VertexId(5) };
    assert!(err.to_string().contains("v5"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ColoringError = io.into();
    assert!(matches!(err, ColoringError::Io(_)));
}
