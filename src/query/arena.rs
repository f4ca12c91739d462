//! Block-structured scratch storage shared by the GJK and EPA solvers.
//!
//! Items are pushed into typed pools and referenced by [`ArenaId`] handles.
//! They are never freed individually: opening a block with
//! [`Arena::begin_block`] records the current size of every pool, and closing
//! it with [`Arena::end_block`] truncates them back, invalidating every handle
//! allocated in-between. Blocks must be closed in LIFO order.

use core::cell::RefCell;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use crate::query::epa::Face;
use crate::query::gjk::{DirectionEntry, SupportPoint};

/// The default byte budget of an [`Arena`].
pub const DEFAULT_ARENA_CAPACITY: usize = 2 * 1024 * 1024;

/// Errors caused by a misuse or an undersized [`Arena`].
///
/// These indicate a configuration or programming error, not bad geometric input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena does not have enough capacity left for the requested allocation.
    #[error("arena exhausted: {requested} bytes requested but only {available} bytes are left.")]
    Exhausted {
        /// The number of bytes requested.
        requested: usize,
        /// The number of bytes still available.
        available: usize,
    },
    /// A block was closed while it was not the innermost open block.
    #[error("arena block {found} closed while the innermost open block is {expected:?}.")]
    Misuse {
        /// The serial number of the innermost open block, if any.
        expected: Option<u32>,
        /// The serial number of the block that was closed.
        found: u32,
    },
}

/// A typed handle to an item allocated in an [`Arena`].
pub struct ArenaId<T> {
    index: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> ArenaId<T> {
    #[inline]
    fn new(index: u32) -> Self {
        Self {
            index,
            marker: PhantomData,
        }
    }

    /// The index of the item inside of its pool.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> Clone for ArenaId<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for ArenaId<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for ArenaId<T> {}

impl<T> Hash for ArenaId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}

impl<T> fmt::Debug for ArenaId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArenaId({})", self.index)
    }
}

/// A contiguous range of items allocated together in an [`Arena`].
pub struct ArenaSlice<T> {
    start: u32,
    len: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> Copy for ArenaSlice<T> {}

impl<T> Clone for ArenaSlice<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> fmt::Debug for ArenaSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArenaSlice({}..{})", self.start, self.start + self.len)
    }
}

impl<T> ArenaSlice<T> {
    /// The number of items of this slice.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Is this slice empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The handle of the `i`-th item of this slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn id(&self, i: usize) -> ArenaId<T> {
        assert!(i < self.len(), "arena slice index out of bounds");
        ArenaId::new(self.start + i as u32)
    }

    /// Iterates through the handles of the items of this slice.
    pub fn iter(&self) -> impl Iterator<Item = ArenaId<T>> {
        (self.start..self.start + self.len).map(ArenaId::new)
    }
}

/// The state of an [`Arena`] captured when a block is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockMark {
    serial: u32,
    used: usize,
    vertices: usize,
    faces: usize,
    directions: usize,
}

impl BlockMark {
    /// The unique serial number of this block within its arena.
    #[inline]
    pub fn serial(&self) -> u32 {
        self.serial
    }
}

mod sealed {
    use crate::query::epa::Face;
    use crate::query::gjk::{DirectionEntry, SupportPoint};

    #[derive(Default)]
    pub struct Pools {
        pub vertices: Vec<SupportPoint>,
        pub faces: Vec<Face>,
        pub directions: Vec<DirectionEntry>,
    }

    pub trait ArenaPool: Sized {
        fn pool(pools: &Pools) -> &Vec<Self>;
        fn pool_mut(pools: &mut Pools) -> &mut Vec<Self>;
    }
}

use sealed::{ArenaPool, Pools};

/// Item types that can be allocated in an [`Arena`].
///
/// This trait is sealed: the arena only stores the data structures of the
/// GJK and EPA solvers.
pub trait ArenaItem: ArenaPool {}

macro_rules! impl_arena_item(
    ($t: ty, $pool: ident) => {
        impl ArenaPool for $t {
            #[inline]
            fn pool(pools: &Pools) -> &Vec<Self> {
                &pools.$pool
            }

            #[inline]
            fn pool_mut(pools: &mut Pools) -> &mut Vec<Self> {
                &mut pools.$pool
            }
        }

        impl ArenaItem for $t {}
    }
);

impl_arena_item!(SupportPoint, vertices);
impl_arena_item!(Face, faces);
impl_arena_item!(DirectionEntry, directions);

/// A block-structured scratch allocator with a fixed byte budget.
///
/// Each allocation is charged `size_of::<T>()` bytes against the capacity given
/// at construction. An arena is meant to be owned by a single thread (or a
/// single caller) and reused across many queries.
pub struct Arena {
    pools: Pools,
    capacity: usize,
    used: usize,
    open: Vec<BlockMark>,
    next_serial: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("used", &self.used)
            .field("open_blocks", &self.open.len())
            .finish()
    }
}

impl Arena {
    /// Creates an arena with the [`DEFAULT_ARENA_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARENA_CAPACITY)
    }

    /// Creates an arena able to hold `capacity` bytes worth of items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pools: Pools::default(),
            capacity,
            used: 0,
            open: Vec::new(),
            next_serial: 0,
        }
    }

    /// The byte budget of this arena.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of bytes currently allocated.
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.used
    }

    /// The number of blocks that are still open.
    #[inline]
    pub fn open_blocks(&self) -> usize {
        self.open.len()
    }

    /// Opens a new block, nested inside of the currently open one (if any).
    pub fn begin_block(&mut self) -> BlockMark {
        let mark = BlockMark {
            serial: self.next_serial,
            used: self.used,
            vertices: self.pools.vertices.len(),
            faces: self.pools.faces.len(),
            directions: self.pools.directions.len(),
        };
        self.next_serial = self.next_serial.wrapping_add(1);
        self.open.push(mark);
        mark
    }

    /// Closes the innermost open block, releasing everything allocated since it was opened.
    ///
    /// Fails with [`ArenaError::Misuse`], leaving the arena untouched, if `mark` is not the
    /// innermost open block.
    pub fn end_block(&mut self, mark: BlockMark) -> Result<(), ArenaError> {
        match self.open.last() {
            Some(top) if *top == mark => {
                let _ = self.open.pop();
                self.used = mark.used;
                self.pools.vertices.truncate(mark.vertices);
                self.pools.faces.truncate(mark.faces);
                self.pools.directions.truncate(mark.directions);
                Ok(())
            }
            top => Err(ArenaError::Misuse {
                expected: top.map(|m| m.serial),
                found: mark.serial,
            }),
        }
    }

    /// Releases every item and closes every block.
    pub fn reset(&mut self) {
        self.open.clear();
        self.used = 0;
        self.pools.vertices.clear();
        self.pools.faces.clear();
        self.pools.directions.clear();
    }

    fn charge(&mut self, requested: usize) -> Result<(), ArenaError> {
        let available = self.capacity - self.used;

        if requested > available {
            return Err(ArenaError::Exhausted {
                requested,
                available,
            });
        }

        self.used += requested;
        Ok(())
    }

    /// Allocates `value` and returns its handle.
    pub fn alloc<T: ArenaItem>(&mut self, value: T) -> Result<ArenaId<T>, ArenaError> {
        self.charge(core::mem::size_of::<T>())?;
        let pool = T::pool_mut(&mut self.pools);
        pool.push(value);
        Ok(ArenaId::new(pool.len() as u32 - 1))
    }

    /// Allocates a copy of every element of `values` contiguously.
    pub fn alloc_slice<T: ArenaItem + Copy>(
        &mut self,
        values: &[T],
    ) -> Result<ArenaSlice<T>, ArenaError> {
        self.charge(core::mem::size_of_val(values))?;
        let pool = T::pool_mut(&mut self.pools);
        let start = pool.len() as u32;
        pool.extend_from_slice(values);

        Ok(ArenaSlice {
            start,
            len: values.len() as u32,
            marker: PhantomData,
        })
    }

    /// Gets the item identified by `id`, or `None` if it has been released.
    #[inline]
    pub fn get<T: ArenaItem>(&self, id: ArenaId<T>) -> Option<&T> {
        T::pool(&self.pools).get(id.index())
    }
}

impl<T: ArenaItem> Index<ArenaId<T>> for Arena {
    type Output = T;

    #[inline]
    fn index(&self, id: ArenaId<T>) -> &T {
        &T::pool(&self.pools)[id.index()]
    }
}

impl<T: ArenaItem> IndexMut<ArenaId<T>> for Arena {
    #[inline]
    fn index_mut(&mut self, id: ArenaId<T>) -> &mut T {
        &mut T::pool_mut(&mut self.pools)[id.index()]
    }
}

std::thread_local! {
    static THREAD_ARENA: RefCell<Arena> = RefCell::new(Arena::new());
}

/// Runs `f` with the arena owned by the current thread.
///
/// The arena is created lazily with the default capacity. If it is already
/// borrowed (i.e. `with_thread_arena` is called from within `f`), a temporary
/// arena is used instead.
pub fn with_thread_arena<R>(f: impl FnOnce(&mut Arena) -> R) -> R {
    THREAD_ARENA.with(|cell| match cell.try_borrow_mut() {
        Ok(mut arena) => f(&mut arena),
        Err(_) => {
            log::debug!("Thread arena already in use, falling back to a temporary arena.");
            f(&mut Arena::new())
        }
    })
}
