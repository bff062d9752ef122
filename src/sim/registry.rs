//! Ordered entity storage
//!
//! Registries keep entities in insertion order (scan order matters for
//! collision resolution) and expose a small mutation contract. Collision
//! passes work by index and must account for shifts after `remove` and
//! `insert_at` themselves.

/// Anything stored in a [`Registry`]
pub trait Entity {
    fn id(&self) -> u32;
}

/// An ordered collection of live entities
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Append at the end of scan order
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert `items` starting at `index`, keeping their relative order.
    /// Entities previously at `index..` shift right.
    pub fn insert_at<I>(&mut self, index: usize, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let index = index.min(self.items.len());
        self.items.splice(index..index, items);
    }

    /// Remove and return the entity at `index`; later entities shift left
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Keep only entities matching `keep`, preserving order
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(keep);
    }

    /// Index of the entity with `id`, if present
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|e| e.id() == id)
    }

    /// Mutable access to two distinct entities (`i < j`)
    pub fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut T, &mut T)> {
        if i >= j || j >= self.items.len() {
            return None;
        }
        let (head, tail) = self.items.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
