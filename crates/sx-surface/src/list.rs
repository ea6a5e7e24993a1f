//! Ordered surface collections with lookups.

use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::Surface;

/// An ordered list of surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceList {
    surfaces: Vec<Surface>,
}

impl SurfaceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Surface> {
        self.surfaces.get(index)
    }

    pub fn as_slice(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn iter(&self) -> impl Iterator<Item = &Surface> + '_ {
        self.surfaces.iter()
    }

    /// Position of the first surface with the given name.
    pub fn find_with_name(&self, name: &str) -> Option<usize> {
        self.surfaces.iter().position(|s| s.name() == name)
    }

    /// Position of the first surface between the named phases, in either order.
    pub fn find_with_phases(&self, phase1: &str, phase2: &str) -> Option<usize> {
        self.surfaces
            .iter()
            .position(|s| s.equivalent_phase_names(phase1, phase2))
    }

    pub fn index_with_name(&self, name: &str) -> SurfaceResult<usize> {
        self.find_with_name(name)
            .ok_or_else(|| SurfaceError::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn index_with_phases(&self, phase1: &str, phase2: &str) -> SurfaceResult<usize> {
        self.find_with_phases(phase1, phase2)
            .ok_or_else(|| SurfaceError::PhasesNotFound {
                phase1: phase1.to_string(),
                phase2: phase2.to_string(),
            })
    }

    pub fn get_with_name(&self, name: &str) -> SurfaceResult<&Surface> {
        self.index_with_name(name).map(|i| &self.surfaces[i])
    }

    pub fn get_with_phases(&self, phase1: &str, phase2: &str) -> SurfaceResult<&Surface> {
        self.index_with_phases(phase1, phase2)
            .map(|i| &self.surfaces[i])
    }

    /// The surfaces with the given names, in the order the names are given.
    pub fn with_names<S: AsRef<str>>(&self, names: &[S]) -> SurfaceResult<SurfaceList> {
        names
            .iter()
            .map(|name| self.get_with_name(name.as_ref()).cloned())
            .collect()
    }

    /// This list followed by `other`.
    pub fn concat(&self, other: &SurfaceList) -> SurfaceList {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl From<Vec<Surface>> for SurfaceList {
    fn from(surfaces: Vec<Surface>) -> Self {
        Self { surfaces }
    }
}

impl FromIterator<Surface> for SurfaceList {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        Self {
            surfaces: iter.into_iter().collect(),
        }
    }
}

impl Extend<Surface> for SurfaceList {
    fn extend<I: IntoIterator<Item = Surface>>(&mut self, iter: I) {
        self.surfaces.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SurfaceList {
    type Item = &'a Surface;
    type IntoIter = std::slice::Iter<'a, Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.surfaces.iter()
    }
}

impl IntoIterator for SurfaceList {
    type Item = Surface;
    type IntoIter = std::vec::IntoIter<Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.surfaces.into_iter()
    }
}

impl std::ops::Index<usize> for SurfaceList {
    type Output = Surface;

    fn index(&self, index: usize) -> &Surface {
        &self.surfaces[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SurfaceList {
        SurfaceList::from(vec![
            Surface::with_all("Calcite:AqueousPhase", "Calcite", 3, "AqueousPhase", 0),
            Surface::with_all("GaseousPhase:AqueousPhase", "GaseousPhase", 1, "AqueousPhase", 0),
            Surface::with_all("Quartz", "Quartz", 4, "Quartz", 4),
        ])
    }

    #[test]
    fn find_by_name() {
        let list = sample();
        assert_eq!(list.find_with_name("Quartz"), Some(2));
        assert_eq!(list.find_with_name("Dolomite"), None);
        assert_eq!(list.get_with_name("Quartz").unwrap().phase_indices(), (4, 4));
        assert_eq!(
            list.index_with_name("Dolomite"),
            Err(SurfaceError::NameNotFound {
                name: "Dolomite".into()
            })
        );
    }

    #[test]
    fn find_by_phases_in_either_order() {
        let list = sample();
        assert_eq!(list.find_with_phases("AqueousPhase", "GaseousPhase"), Some(1));
        assert_eq!(list.find_with_phases("GaseousPhase", "AqueousPhase"), Some(1));
        assert_eq!(
            list.get_with_phases("AqueousPhase", "Calcite").unwrap().name(),
            "Calcite:AqueousPhase"
        );
        assert!(matches!(
            list.index_with_phases("Calcite", "Quartz"),
            Err(SurfaceError::PhasesNotFound { .. })
        ));
    }

    #[test]
    fn with_names_selects_in_order() {
        let list = sample();
        let picked = list.with_names(&["Quartz", "Calcite:AqueousPhase"]).unwrap();
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].name(), "Quartz");
        assert_eq!(picked[1].name(), "Calcite:AqueousPhase");

        assert!(list.with_names(&["Quartz", "Dolomite"]).is_err());
    }

    #[test]
    fn concat_and_extend() {
        let list = sample();
        let both = list.concat(&list);
        assert_eq!(both.len(), 6);
        assert_eq!(both[3], list[0]);

        let mut grown = SurfaceList::new();
        assert!(grown.is_empty());
        grown.extend(list.clone());
        grown.push(Surface::named("Extra"));
        assert_eq!(grown.len(), 4);
        assert_eq!(grown.iter().last().map(Surface::name), Some("Extra"));
    }
}
