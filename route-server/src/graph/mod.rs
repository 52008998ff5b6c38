//! Connection graph.
//!
//! Turns a flat list of priced connections into an adjacency structure the
//! planner can search. Every distinct location is interned exactly once and
//! referred to by a small [`LocationId`] afterwards, so the search never
//! compares or hashes composite location values on its hot path.

use indexmap::IndexSet;
use tracing::debug;

use crate::domain::{Connection, Location};

/// Index of a location interned in a [`Network`].
///
/// Ids are dense and assigned in first-seen order, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    /// Returns the id as an index into per-location tables.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a connection stored in a [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

#[derive(Debug, Clone)]
struct Edge {
    from: LocationId,
    to: LocationId,
    connection: Connection,
}

/// Directed, priced graph of locations.
///
/// Built once per connection set and read-only afterwards. Locations are
/// stored in the order they are first seen while scanning connections: each
/// connection contributes its `from` location, then its `to` location.
/// Locations that only ever appear as a destination have no outbound edges.
#[derive(Debug, Clone, Default)]
pub struct Network {
    locations: IndexSet<Location>,
    edges: Vec<Edge>,
    outbound: Vec<Vec<EdgeId>>,
}

impl Network {
    /// Build a network from a sequence of connections.
    ///
    /// Never fails. Duplicate connections are all kept as parallel edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{Connection, Coordinates, Location};
    /// use route_server::graph::Network;
    ///
    /// let at = |title: &str| Location::new(title, Coordinates::new(0.0, 0.0).unwrap()).unwrap();
    /// let network = Network::build(vec![
    ///     Connection::new(at("First"), at("Second"), 2.0).unwrap(),
    ///     Connection::new(at("Second"), at("Third"), 5.0).unwrap(),
    /// ]);
    ///
    /// assert_eq!(network.len(), 3);
    /// assert_eq!(network.edge_count(), 2);
    /// ```
    pub fn build<I>(connections: I) -> Self
    where
        I: IntoIterator<Item = Connection>,
    {
        let mut network = Self::default();
        for connection in connections {
            network.insert(connection);
        }

        debug!(
            locations = network.len(),
            connections = network.edge_count(),
            "built connection network"
        );

        network
    }

    fn insert(&mut self, connection: Connection) {
        let from = self.intern(connection.from());
        let to = self.intern(connection.to());

        let edge = EdgeId(self.edges.len());
        self.edges.push(Edge {
            from,
            to,
            connection,
        });
        self.outbound[from.index()].push(edge);
    }

    fn intern(&mut self, location: &Location) -> LocationId {
        if let Some(index) = self.locations.get_index_of(location) {
            return LocationId(index);
        }

        let (index, _) = self.locations.insert_full(location.clone());
        self.outbound.push(Vec::new());
        LocationId(index)
    }

    /// Number of distinct locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the network has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of stored connections, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Locations in first-seen order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    /// All connections in input order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.edges.iter().map(|e| &e.connection)
    }

    /// Look up the id of a location, if it is part of the network.
    pub fn id_of(&self, location: &Location) -> Option<LocationId> {
        self.locations.get_index_of(location).map(LocationId)
    }

    /// Look up a location by id.
    ///
    /// Returns `None` for ids that did not come from this network.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get_index(id.index())
    }

    /// Outbound edges of a location, in input order.
    ///
    /// Unknown ids have no outbound edges.
    pub fn outbound(&self, id: LocationId) -> &[EdgeId] {
        self.outbound
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The connection stored for an edge.
    pub fn connection(&self, edge: EdgeId) -> &Connection {
        &self.edges[edge.0].connection
    }

    /// Location id an edge leaves from.
    pub fn source(&self, edge: EdgeId) -> LocationId {
        self.edges[edge.0].from
    }

    /// Location id an edge leads to.
    pub fn target(&self, edge: EdgeId) -> LocationId {
        self.edges[edge.0].to
    }

    /// Id of the first-seen location with the given title.
    ///
    /// Titles are not unique; when several locations share a title the one
    /// seen first while building wins.
    pub fn find_by_title(&self, title: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|l| l.title() == title)
            .map(LocationId)
    }

    /// Locations whose title starts with `prefix`, in first-seen order.
    ///
    /// An empty prefix matches nothing. `exclude` drops one location from
    /// the results, typically the endpoint already chosen on the other side.
    pub fn search(&self, prefix: &str, exclude: Option<&Location>) -> Vec<&Location> {
        if prefix.is_empty() {
            return Vec::new();
        }

        self.locations
            .iter()
            .filter(|l| l.title().starts_with(prefix))
            .filter(|l| exclude != Some(*l))
            .collect()
    }
}

impl FromIterator<Connection> for Network {
    fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
        Self::build(iter)
    }
}
