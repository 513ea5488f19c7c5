use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many times it, or anything cloned from it, has been cloned. Used to
/// observe whether copy-on-write storage duplicated its contents.
#[derive(Debug)]
pub struct CountedClone {
    pub value: usize,
    clones: Rc<Cell<usize>>,
}

impl CountedClone {
    pub fn new(value: usize) -> CountedClone {
        CountedClone {
            value,
            clones: Rc::new(Cell::new(0)),
        }
    }

    /// Returns the number of clones made of this value's family so far.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }
}

impl Clone for CountedClone {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        CountedClone {
            value: self.value,
            clones: Rc::clone(&self.clones),
        }
    }
}

impl PartialEq for CountedClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A value that increments a shared counter when dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
