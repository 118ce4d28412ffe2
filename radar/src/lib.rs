//! Interactive radar chart for self-reported AI usage.
//!
//! Each axis of the chart is one stage of work (taken from a template); the
//! user drags a control point along each axis to say how much AI help went
//! into that stage. Values live in `[0.05, 1.0]` and start at `0.5`.
//!
//! Everything except [`dom`] is plain Rust and runs headless: the browser
//! adapter feeds DOM events into an [`engine::RadarChart`] and carries out
//! the [`engine::Action`]s it returns, while export and tests go through the
//! same layout code via [`svg::SvgScene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::RadarChart`]: model, layout and drag session in one place |
//! | [`geometry`] | Axis angles, ring vertices, projection, screen-to-logical mapping |
//! | [`model`] | Labels and clamped per-axis values |
//! | [`input`] | Pointer kinds, cancel reasons and the drag state machine |
//! | [`hit`] | Control-point positions and hit-testing |
//! | [`render`] | Grid/data layer construction and the [`render::RadarSurface`] seam |
//! | [`svg`] | Headless SVG scene, serialization and export styling |
//! | [`raster`] | SVG-to-PNG export ([`raster::Rasterizer`]) |
//! | [`dom`] | `web_sys` surface, event wiring and canvas rasterizer |
//! | [`consts`] | Layout and value constants |

pub mod consts;
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod model;
pub mod raster;
pub mod render;
pub mod svg;
