//! Concrete street network: the template graph handed to the simulation

use crate::error::Error;

use super::graph::Graph;
use super::street::Street;

/// Road network keyed by node name, with a network-wide speed limit used
/// for streets that do not declare their own.
#[derive(Debug, Clone)]
pub struct StreetNetwork {
    graph: Graph<String, Street>,
    default_max_speed: f64,
}

impl StreetNetwork {
    pub fn new(default_max_speed: f64) -> Self {
        StreetNetwork {
            graph: Graph::new(),
            default_max_speed,
        }
    }

    pub fn default_max_speed(&self) -> f64 {
        self.default_max_speed
    }

    /// Adds a directed street segment, creating endpoints as needed
    pub fn add_street(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
        max_speed: Option<f64>,
    ) {
        let max_speed = max_speed.unwrap_or(self.default_max_speed);
        self.graph
            .create_edge(from.into(), to.into(), Street::new(distance, max_speed));
    }

    /// Registers recently observed speeds on an existing street.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStreet`] when no such directed edge exists.
    pub fn record_speeds(
        &mut self,
        from: &str,
        to: &str,
        speeds: impl IntoIterator<Item = f64>,
    ) -> Result<(), Error> {
        let street = self
            .graph
            .weight_mut(&from.to_owned(), &to.to_owned())
            .ok_or_else(|| Error::UnknownStreet {
                from: from.to_owned(),
                to: to.to_owned(),
            })?;
        street.register_speeds(speeds);
        Ok(())
    }

    /// The template graph; immutable once trials begin
    pub fn graph(&self) -> &Graph<String, Street> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_street_uses_default_limit() {
        let mut network = StreetNetwork::new(60.0);
        network.add_street("a", "b", 10.0, None);
        network.add_street("b", "c", 10.0, Some(40.0));

        let graph = network.graph();
        let ab = graph.weight(&"a".into(), &"b".into()).unwrap();
        let bc = graph.weight(&"b".into(), &"c".into()).unwrap();
        assert_eq!(ab.max_speed(), 60.0);
        assert_eq!(bc.max_speed(), 40.0);
    }

    #[test]
    fn record_speeds_on_missing_street_fails() {
        let mut network = StreetNetwork::new(60.0);
        network.add_street("a", "b", 10.0, None);

        let result = network.record_speeds("b", "a", [30.0]);
        assert!(matches!(
            result,
            Err(Error::UnknownStreet { from, to }) if from == "b" && to == "a"
        ));
    }

    #[test]
    fn record_speeds_appends() {
        let mut network = StreetNetwork::new(60.0);
        network.add_street("a", "b", 10.0, None);
        network.record_speeds("a", "b", [30.0, 35.0]).unwrap();
        network.record_speeds("a", "b", [20.0]).unwrap();

        // all recorded speeds stay available for sampling
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let graph = network.graph();
        let street = graph.weight(&"a".into(), &"b".into()).unwrap();
        for _ in 0..32 {
            let cost = street.resolve(Default::default(), &mut rng);
            assert!([20.0, 30.0, 35.0].contains(&cost.speed()));
        }
    }
}
