pub mod connect;
pub mod dijkstra;
pub mod graph;
pub mod grid;
pub mod input;
pub mod label;

pub use dijkstra::{route, Route};
pub use graph::{StationId, Time, TransitGraph, UNREACHABLE};
pub use grid::{Cell, Grid};
pub use input::{read_problem, Mode, Problem};
