use crate::math::{Real, Vector};
use crate::query::{Arena, ArenaError, ArenaId};

/// The number of buckets of the table of search directions already tried by GJK.
pub const DIRECTION_TABLE_SIZE: usize = 64;

static_assertions::const_assert!(DIRECTION_TABLE_SIZE.is_power_of_two());

/// A search direction recorded by GJK, chained with the other entries of its bucket.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionEntry {
    dir: Vector<Real>,
    next: Option<ArenaId<DirectionEntry>>,
}

/// Hash set of the directions GJK already queried, with entries living in an [`Arena`].
///
/// Finding the exact same normalized direction twice means the search is cycling,
/// which GJK treats as convergence.
#[derive(Clone, Debug)]
pub(crate) struct DirectionTable {
    buckets: [Option<ArenaId<DirectionEntry>>; DIRECTION_TABLE_SIZE],
}

impl DirectionTable {
    pub fn new() -> Self {
        Self {
            buckets: [None; DIRECTION_TABLE_SIZE],
        }
    }

    pub fn clear(&mut self) {
        self.buckets = [None; DIRECTION_TABLE_SIZE];
    }

    pub fn bucket(dir: &Vector<Real>) -> usize {
        let h = ((dir.x * 15461.0) as i32 as u32)
            ^ ((dir.y * 83003.0) as i32 as u32)
            ^ ((dir.z * 15473.0) as i32 as u32);
        (h.wrapping_mul(169639) as usize) & (DIRECTION_TABLE_SIZE - 1)
    }

    /// Records `dir`, returning `false` if it was already recorded.
    pub fn insert(&mut self, arena: &mut Arena, dir: &Vector<Real>) -> Result<bool, ArenaError> {
        let bucket = Self::bucket(dir);
        let mut curr = self.buckets[bucket];

        while let Some(id) = curr {
            let entry = &arena[id];

            if entry.dir == *dir {
                return Ok(false);
            }

            curr = entry.next;
        }

        let id = arena.alloc(DirectionEntry {
            dir: *dir,
            next: self.buckets[bucket],
        })?;
        self.buckets[bucket] = Some(id);

        Ok(true)
    }
}
