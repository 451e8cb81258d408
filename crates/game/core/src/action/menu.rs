//! Hierarchical action menus.
//!
//! Labels are grouped into an explicit tree instead of being split on `/`
//! at presentation time. Navigation asks a chooser one level at a time;
//! cancelling a sub-level goes back to its parent.

/// One labelled entry of a menu level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry<T> {
    Leaf(T),
    Group(Menu<T>),
}

/// An ordered menu level. Labels are unique within a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu<T> {
    entries: Vec<(String, MenuEntry<T>)>,
}

impl<T> Default for Menu<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Menu<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Labels of this level, in insertion order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn entry(&self, label: &str) -> Option<&MenuEntry<T>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, entry)| entry)
    }

    /// Places `value` at `path`, creating groups as needed.
    ///
    /// A later insert at the same path replaces the earlier leaf in place. A
    /// leaf standing where a group is needed is replaced by the group. An
    /// empty path is ignored.
    pub fn insert_path<S: AsRef<str>>(&mut self, path: &[S], value: T) {
        let Some((head, rest)) = path.split_first() else {
            return;
        };
        let head = head.as_ref();

        if rest.is_empty() {
            match self.position(head) {
                Some(index) => self.entries[index].1 = MenuEntry::Leaf(value),
                None => self.entries.push((head.to_owned(), MenuEntry::Leaf(value))),
            }
            return;
        }

        let index = match self.position(head) {
            Some(index) => {
                if matches!(self.entries[index].1, MenuEntry::Leaf(_)) {
                    self.entries[index].1 = MenuEntry::Group(Menu::new());
                }
                index
            }
            None => {
                self.entries
                    .push((head.to_owned(), MenuEntry::Group(Menu::new())));
                self.entries.len() - 1
            }
        };

        if let MenuEntry::Group(group) = &mut self.entries[index].1 {
            group.insert_path(rest, value);
        }
    }

    /// Walks the tree with `choose`, which is handed each level's labels and
    /// returns the picked label or `None` to cancel.
    ///
    /// Cancelling (or naming a label that does not exist) at a sub-level
    /// spends one unit of `budget` and re-asks the parent level; at the root
    /// it returns `None`. An empty budget returns `None` as well.
    pub fn navigate<F>(&self, choose: &mut F, budget: &mut usize) -> Option<&T>
    where
        F: FnMut(&[String]) -> Option<String>,
    {
        let labels = self.labels();
        while *budget > 0 {
            let picked = choose(&labels)?;
            match self.entry(&picked)? {
                MenuEntry::Leaf(value) => return Some(value),
                MenuEntry::Group(group) => {
                    if let Some(value) = group.navigate(&mut *choose, budget) {
                        return Some(value);
                    }
                    *budget = budget.saturating_sub(1);
                }
            }
        }
        None
    }

    /// All leaves, depth first.
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        for (_, entry) in &self.entries {
            match entry {
                MenuEntry::Leaf(value) => out.push(value),
                MenuEntry::Group(group) => out.extend(group.leaves()),
            }
        }
        out
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == label)
    }
}
