use crate::containers::StorageKey;

/// Identifies a region of the map, i.e. a variable of the coloring problem.
///
/// The identifier is the index of the region in the adjacency matrix and in the list of region
/// names which was provided to the [`Solver`](crate::Solver).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct VariableId {
    id: u32,
}

impl VariableId {
    pub const fn new(id: u32) -> Self {
        VariableId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId::new(index as u32)
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

/// The index of a color in the palette.
///
/// Colors are ordered by their position in the palette; domains are always kept in ascending
/// [`ColorId`] order.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct ColorId {
    id: u32,
}

impl ColorId {
    pub const fn new(id: u32) -> Self {
        ColorId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for ColorId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ColorId::new(index as u32)
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

impl std::fmt::Debug for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

/// Iterates over the [`VariableId`]s in the range `[start_index, end_index)`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct VariableGeneratorIterator {
    current_index: u32,
    end_index: u32,
}

impl VariableGeneratorIterator {
    pub fn new(start_index: u32, end_index: u32) -> VariableGeneratorIterator {
        VariableGeneratorIterator {
            current_index: start_index,
            end_index,
        }
    }
}

impl Iterator for VariableGeneratorIterator {
    type Item = VariableId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.end_index {
            return None;
        }

        let variable = VariableId::new(self.current_index);
        self.current_index += 1;

        Some(variable)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_index.saturating_sub(self.current_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VariableGeneratorIterator {}
