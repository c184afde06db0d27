use crate::api::types::BodyId;
use crate::components::body::BodyInstance;

/// Body storage using a flat Vec.
/// The body set is fixed at init (nine entries), so lookups are a short
/// linear scan and nothing is ever removed.
pub struct Scene {
    bodies: Vec<BodyInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: BodyInstance) {
        self.bodies.push(body);
    }

    /// Get a reference to a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&BodyInstance> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by ID.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut BodyInstance> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Iterate over all bodies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyInstance> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BodyInstance> {
        self.bodies.iter_mut()
    }

    /// Find the first body with the given catalog name.
    pub fn find_by_name(&self, name: &str) -> Option<&BodyInstance> {
        self.bodies.iter().find(|b| b.descriptor().name == name)
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EARTH, SUN};

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = BodyId(1);
        scene.spawn(BodyInstance::new(id, SUN));
        let sun = scene.get(id).unwrap();
        assert_eq!(sun.descriptor().name, "sun");
    }

    #[test]
    fn get_mut_allows_state_changes() {
        let mut scene = Scene::new();
        let id = BodyId(4);
        scene.spawn(BodyInstance::new(id, EARTH));
        scene.get_mut(id).unwrap().highlight(1.05);
        assert_eq!(scene.get(id).unwrap().scale, 1.05);
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new();
        scene.spawn(BodyInstance::new(BodyId(1), SUN));
        scene.spawn(BodyInstance::new(BodyId(4), EARTH));
        let earth = scene.find_by_name("earth").unwrap();
        assert_eq!(earth.id, BodyId(4));
        assert!(scene.find_by_name("vulcan").is_none());
    }
}
