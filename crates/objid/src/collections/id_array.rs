use crate::ObjectId;

/// Sorted array of ObjectIds with binary search.
///
/// Identifiers are appended to a `Vec` and lazily sorted on the first lookup
/// or iteration that requires order. Order is the [`ObjectId`] total order,
/// so a sorted `IdArray` can be written out directly as a store index.
#[derive(Debug, Clone)]
pub struct IdArray {
    ids: Vec<ObjectId>,
    sorted: bool,
}

impl IdArray {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            sorted: true,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            ids: Vec::with_capacity(cap),
            sorted: true,
        }
    }

    /// Append an id. Marks the array as unsorted unless it stays in order.
    pub fn push(&mut self, id: ObjectId) {
        if self.sorted {
            if let Some(last) = self.ids.last() {
                self.sorted = *last <= id;
            }
        }
        self.ids.push(id);
    }

    /// Sort the array if not already sorted.
    pub fn sort(&mut self) {
        if !self.sorted {
            self.ids.sort_unstable();
            self.sorted = true;
        }
    }

    /// Sort and drop duplicate ids.
    pub fn dedup(&mut self) {
        self.sort();
        self.ids.dedup();
    }

    /// Check if the array contains the given id (sorts first if needed).
    pub fn contains(&mut self, id: &ObjectId) -> bool {
        self.lookup(id).is_some()
    }

    /// Binary search for an id. Returns the index if found (sorts first if needed).
    pub fn lookup(&mut self, id: &ObjectId) -> Option<usize> {
        self.sort();
        self.ids.binary_search(id).ok()
    }

    /// Visit each unique id in order, stopping at the first error.
    pub fn for_each_unique<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&ObjectId) -> Result<(), E>,
    {
        self.sort();
        let mut prev: Option<&ObjectId> = None;
        for id in &self.ids {
            if prev != Some(id) {
                f(id)?;
            }
            prev = Some(id);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over all ids (in current order; may be unsorted).
    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.ids.iter()
    }

    /// Iterate over all ids in sorted order.
    pub fn iter_sorted(&mut self) -> impl Iterator<Item = &ObjectId> {
        self.sort();
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.sorted = true;
    }

    /// Sort and return the underlying ids.
    pub fn into_sorted_vec(mut self) -> Vec<ObjectId> {
        self.sort();
        self.ids
    }
}

impl Default for IdArray {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ObjectId> for IdArray {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        let ids: Vec<ObjectId> = iter.into_iter().collect();
        let sorted = ids.windows(2).all(|w| w[0] <= w[1]);
        Self { ids, sorted }
    }
}

impl Extend<ObjectId> for IdArray {
    fn extend<I: IntoIterator<Item = ObjectId>>(&mut self, iter: I) {
        for id in iter {
            self.push(id);
        }
    }
}
