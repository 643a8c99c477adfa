//! `RoadMap` and `Route`: weighted route finding on the Romania road map.
//!
//! Roads are undirected with distances in kilometres. The straight-line
//! distances to Bucharest form an admissible, consistent heuristic for
//! routes ending there.

use std::collections::BTreeMap;

use waypoint_kernel::problem::{HeuristicFunction, Problem};

use crate::error::WorldError;

/// A city name.
pub type City = &'static str;

const ROADS: &[(City, City, u32)] = &[
    ("Arad", "Zerind", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Zerind", "Oradea", 71),
    ("Oradea", "Sibiu", 151),
    ("Timisoara", "Lugoj", 111),
    ("Lugoj", "Mehadia", 70),
    ("Mehadia", "Drobeta", 75),
    ("Drobeta", "Craiova", 120),
    ("Craiova", "Rimnicu Vilcea", 146),
    ("Craiova", "Pitesti", 138),
    ("Sibiu", "Fagaras", 99),
    ("Sibiu", "Rimnicu Vilcea", 80),
    ("Rimnicu Vilcea", "Pitesti", 97),
    ("Fagaras", "Bucharest", 211),
    ("Pitesti", "Bucharest", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Urziceni", "Hirsova", 98),
    ("Hirsova", "Eforie", 86),
    ("Urziceni", "Vaslui", 142),
    ("Vaslui", "Iasi", 92),
    ("Iasi", "Neamt", 87),
];

const STRAIGHT_LINE_TO_BUCHAREST: &[(City, u32)] = &[
    ("Arad", 366),
    ("Bucharest", 0),
    ("Craiova", 160),
    ("Drobeta", 242),
    ("Eforie", 161),
    ("Fagaras", 176),
    ("Giurgiu", 77),
    ("Hirsova", 151),
    ("Iasi", 226),
    ("Lugoj", 244),
    ("Mehadia", 241),
    ("Neamt", 234),
    ("Oradea", 380),
    ("Pitesti", 100),
    ("Rimnicu Vilcea", 193),
    ("Sibiu", 253),
    ("Timisoara", 329),
    ("Urziceni", 80),
    ("Vaslui", 199),
    ("Zerind", 374),
];

/// Undirected weighted road graph. Neighbors iterate in name order.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    roads: BTreeMap<City, BTreeMap<City, f64>>,
}

impl RoadMap {
    /// The Romania map.
    #[must_use]
    pub fn romania() -> Self {
        let mut map = Self::default();
        for &(a, b, km) in ROADS {
            map.add_road(a, b, f64::from(km));
        }
        map
    }

    /// Add (or overwrite) an undirected road.
    pub fn add_road(&mut self, a: City, b: City, distance: f64) {
        self.roads.entry(a).or_default().insert(b, distance);
        self.roads.entry(b).or_default().insert(a, distance);
    }

    #[must_use]
    pub fn contains(&self, city: City) -> bool {
        self.roads.contains_key(city)
    }

    /// Length of the direct road between two cities.
    #[must_use]
    pub fn distance(&self, a: City, b: City) -> Option<f64> {
        self.roads.get(a)?.get(b).copied()
    }

    /// Directly connected cities in name order.
    pub fn neighbors(&self, city: City) -> impl Iterator<Item = City> + '_ {
        self.roads
            .get(city)
            .into_iter()
            .flat_map(|next| next.keys().copied())
    }

    #[must_use]
    pub fn city_count(&self) -> usize {
        self.roads.len()
    }

    /// Total length of a route given as the cities visited after `start`.
    #[must_use]
    pub fn route_length(&self, start: City, stops: &[City]) -> Option<f64> {
        let mut at = start;
        let mut total = 0.0;
        for &next in stops {
            total += self.distance(at, next)?;
            at = next;
        }
        Some(total)
    }
}

/// Drive from `start` to `goal`. Actions name the next city.
#[derive(Debug, Clone)]
pub struct Route {
    map: RoadMap,
    start: City,
    goal: City,
}

impl Route {
    /// # Errors
    ///
    /// [`WorldError::UnknownCity`] if either endpoint is not on the map.
    pub fn new(map: RoadMap, start: City, goal: City) -> Result<Self, WorldError> {
        for city in [start, goal] {
            if !map.contains(city) {
                return Err(WorldError::UnknownCity {
                    city: city.to_string(),
                });
            }
        }
        Ok(Self { map, start, goal })
    }

    /// Arad to Bucharest on the Romania map.
    #[must_use]
    pub fn arad_to_bucharest() -> Self {
        Self {
            map: RoadMap::romania(),
            start: "Arad",
            goal: "Bucharest",
        }
    }

    #[must_use]
    pub fn map(&self) -> &RoadMap {
        &self.map
    }
}

impl Problem for Route {
    type State = City;
    type Action = City;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "romania_route"
    }

    fn initial_state(&self) -> City {
        self.start
    }

    fn actions(&self, state: &City) -> Vec<City> {
        self.map.neighbors(*state).collect()
    }

    fn result(&self, _state: &City, action: &City) -> City {
        *action
    }

    fn step_cost(&self, from: &City, _action: &City, to: &City) -> f64 {
        self.map.distance(*from, *to).unwrap_or(f64::INFINITY)
    }

    fn is_goal(&self, state: &City) -> bool {
        *state == self.goal
    }
}

/// Heuristic backed by a per-city table. Cities missing from the table
/// estimate zero.
#[derive(Debug, Clone, Default)]
pub struct CityTable {
    estimates: BTreeMap<City, f64>,
}

impl CityTable {
    /// Straight-line distances to Bucharest.
    #[must_use]
    pub fn straight_line_to_bucharest() -> Self {
        Self {
            estimates: STRAIGHT_LINE_TO_BUCHAREST
                .iter()
                .map(|&(city, km)| (city, f64::from(km)))
                .collect(),
        }
    }

    /// Replace one city's estimate.
    #[must_use]
    pub fn with_estimate(mut self, city: City, estimate: f64) -> Self {
        self.estimates.insert(city, estimate);
        self
    }
}

impl HeuristicFunction<City> for CityTable {
    fn estimate(&self, state: &City) -> f64 {
        self.estimates.get(state).copied().unwrap_or(0.0)
    }
}
