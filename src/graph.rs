use anyhow::{bail, Result};
use fnv::FnvHashMap;
use hashbrown::HashMap;

use crate::connect::discover_adjacency;
use crate::grid::Grid;
use crate::label::resolve_name;

pub type StationId = usize;
pub type Time = u64;

/// Distance sentinel for stations no path reaches.
pub const UNREACHABLE: Time = Time::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub row: usize,
    pub column: usize,
}

/// The transit network: stations in discovery order plus an adjacency list
/// per station. Edges are append-only and parallel edges are kept as-is;
/// relaxation in the router picks the cheapest, so duplicates only cost a
/// little extra work there.
#[derive(Debug)]
pub struct TransitGraph {
    stations: Vec<Station>,
    neighbors: Vec<Vec<(StationId, Time)>>,
    name_to_id: FnvHashMap<String, StationId>,
}

impl TransitGraph {
    /// Discover stations, resolve their names, and derive corridor edges.
    /// The grid is only borrowed; callers drop it once this returns.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let markers: Vec<(usize, usize)> = grid.stations().collect();

        let mut stations = Vec::with_capacity(markers.len());
        let mut name_to_id: FnvHashMap<String, StationId> = FnvHashMap::default();
        let mut coord_to_id: HashMap<(usize, usize), StationId> = HashMap::new();

        for (id, &(row, column)) in markers.iter().enumerate() {
            let Some(name) = resolve_name(grid, row, column) else {
                bail!("station marker at ({row}, {column}) has no adjacent label");
            };
            if name_to_id.insert(name.clone(), id).is_some() {
                bail!("duplicate station name {name:?} at ({row}, {column})");
            }
            coord_to_id.insert((row, column), id);
            stations.push(Station { name, row, column });
        }

        let mut graph = Self {
            neighbors: vec![Vec::new(); stations.len()],
            stations,
            name_to_id,
        };

        for (id, &origin) in markers.iter().enumerate() {
            for (coord, hops) in discover_adjacency(grid, origin) {
                let Some(&target) = coord_to_id.get(&coord) else {
                    // BFS only ever terminates on station cells, all of
                    // which were just indexed.
                    bail!("corridor search reached unindexed cell {coord:?}");
                };
                graph.add_edge(id, target, hops);
            }
        }
        Ok(graph)
    }

    /// Pure append. No validation, no merging of parallel edges.
    pub fn add_edge(&mut self, from: StationId, to: StationId, time: Time) {
        self.neighbors[from].push((to, time));
    }

    /// Layer one explicit flight onto the graph. Both endpoints must name
    /// stations discovered on the grid.
    pub fn add_flight(&mut self, dep: &str, dest: &str, time: Time) -> Result<()> {
        let Some(from) = self.station_id(dep) else {
            bail!("flight departure {dep:?} is not a station on the map");
        };
        let Some(to) = self.station_id(dest) else {
            bail!("flight destination {dest:?} is not a station on the map");
        };
        self.add_edge(from, to, time);
        Ok(())
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.name_to_id.get(name).copied()
    }

    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id]
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn neighbors(&self, id: StationId) -> &[(StationId, Time)] {
        &self.neighbors[id]
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }
}
