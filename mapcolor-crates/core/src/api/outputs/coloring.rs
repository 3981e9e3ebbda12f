use std::fmt::Display;

use crate::basic_types::ColorId;
use crate::basic_types::VariableId;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::Assignment;
use crate::mapcolor_assert_simple;

/// A complete coloring of a map, mapping every region to the name of its color.
///
/// The names are borrowed from the lists which were passed to the [`Solver`](crate::Solver).
/// Regions can be looked up by name ([`Coloring::color_of`]) or by [`VariableId`]
/// ([`Coloring::color_of_variable`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring<'names> {
    colors: KeyedVec<VariableId, ColorId>,
    regions: Vec<&'names str>,
    palette: Vec<&'names str>,
    by_region: HashMap<&'names str, &'names str>,
}

impl<'names> Coloring<'names> {
    /// Builds the coloring from a complete assignment.
    pub(crate) fn from_assignment(
        assignment: &Assignment,
        regions: &[&'names str],
        palette: &[&'names str],
    ) -> Coloring<'names> {
        mapcolor_assert_simple!(assignment.is_complete());

        let colors = assignment
            .iter()
            .filter_map(|(_, color)| color)
            .collect::<KeyedVec<VariableId, ColorId>>();

        let by_region = regions
            .iter()
            .zip(colors.iter())
            .filter_map(|(&region, color)| {
                palette
                    .get(color.index())
                    .map(|&color_name| (region, color_name))
            })
            .collect();

        Coloring {
            colors,
            regions: regions.to_vec(),
            palette: palette.to_vec(),
            by_region,
        }
    }

    /// Returns the name of the color given to the region called `region`.
    pub fn color_of(&self, region: &str) -> Option<&'names str> {
        self.by_region.get(region).copied()
    }

    /// Returns the palette index of the color given to `variable`.
    pub fn color_of_variable(&self, variable: VariableId) -> Option<ColorId> {
        self.colors.get(variable).copied()
    }

    /// Returns the name of the color given to `variable`.
    pub fn color_name_of_variable(&self, variable: VariableId) -> Option<&'names str> {
        self.color_of_variable(variable)
            .and_then(|color| self.palette.get(color.index()))
            .copied()
    }

    /// Iterates over the `(region, color)` pairs in the order of the regions.
    pub fn iter(&self) -> impl Iterator<Item = (&'names str, &'names str)> + '_ {
        self.regions
            .iter()
            .zip(self.colors.iter())
            .filter_map(|(&region, color)| {
                self.palette
                    .get(color.index())
                    .map(|&color_name| (region, color_name))
            })
    }

    /// Returns the number of colored variables.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the coloring as a map from region name to color name.
    ///
    /// Regions sharing a name share a single entry.
    pub fn as_map(&self) -> &HashMap<&'names str, &'names str> {
        &self.by_region
    }
}

impl Display for Coloring<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (region, color)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{region}={color}")?;
        }
        write!(f, "}}")
    }
}
