use std::collections::BTreeMap;

/// One entity map plus its id counter.
///
/// Ids start at 1 and are never reused. Rows are kept in a `BTreeMap`, so
/// iteration follows creation order.
#[derive(Debug)]
pub(crate) struct Table<K, V> {
    rows: BTreeMap<K, V>,
    next_id: u32,
}

impl<K, V> Table<K, V>
where
    K: Ord + Copy + From<u32>,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Reserve the next id and store the record built for it.
    pub fn create(&mut self, build: impl FnOnce(K) -> V) -> V {
        let id = K::from(self.next_id);
        self.next_id += 1;
        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: K) -> Option<V> {
        self.rows.get(&id).cloned()
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut V> {
        self.rows.get_mut(&id)
    }

    pub fn all(&self) -> Vec<V> {
        self.rows.values().cloned().collect()
    }

    pub fn filter(&self, predicate: impl Fn(&V) -> bool) -> Vec<V> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn find(&self, predicate: impl Fn(&V) -> bool) -> Option<V> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knowledge_types::FileId;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut table: Table<FileId, (FileId, &str)> = Table::new();
        let a = table.create(|id| (id, "a"));
        let b = table.create(|id| (id, "b"));
        let c = table.create(|id| (id, "c"));

        assert_eq!(a.0, FileId(1));
        assert_eq!(b.0, FileId(2));
        assert_eq!(c.0, FileId(3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_iteration_follows_creation_order() {
        let mut table: Table<FileId, u32> = Table::new();
        for n in [30, 10, 20] {
            table.create(|_| n);
        }
        assert_eq!(table.all(), vec![30, 10, 20]);
        assert_eq!(table.filter(|n| *n > 15), vec![30, 20]);
        assert_eq!(table.find(|n| *n == 10), Some(10));
        assert!(table.get(FileId(4)).is_none());
    }
}
