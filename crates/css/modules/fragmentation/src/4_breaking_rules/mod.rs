//! CSS Fragmentation 3 Chapter 4 — Rules for breaking (spec-mirrored folder)
//!
//! - §4.1 monolithic boxes: `part_4_1_monolithic`
//! - §4.1 Class C breaks between line boxes: `part_4_1_line_adjacency`
//! - §4.1 possible break points: `part_4_1_possible_break_points`

pub mod part_4_1_line_adjacency;
pub mod part_4_1_monolithic;
pub mod part_4_1_possible_break_points;
