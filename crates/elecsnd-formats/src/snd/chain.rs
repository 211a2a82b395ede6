//! Sub-header chain traversal
//!
//! Sub-headers form a singly-linked list through the file: each one stores
//! the absolute offset of the next. The format has no end sentinel, so the
//! resource count from the global header is the only terminator the walker
//! trusts. A cyclic or garbage `next_offset` therefore can't make the walk
//! run forever.

use crate::snd::cursor::ArchiveCursor;
use crate::snd::error::SndResult;
use crate::snd::header::SndHeader;
use crate::snd::key::ResourceKey;
use binrw::{BinRead, BinWrite};
use std::io::{Read, Seek};
use tracing::debug;

/// Size of an encoded sub-header in bytes
pub const SUB_HEADER_SIZE: u32 = 16;

/// On-disk sub-header preceding each payload (16 bytes, little-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct SubHeader {
    /// Absolute offset of the next sub-header
    pub next_offset: u32,
    /// Length of the payload that follows this sub-header
    pub payload_length: u32,
    /// Resource key
    pub key: ResourceKey,
}

/// One step of the chain walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEntry {
    /// Offset of this entry's sub-header
    pub header_offset: u64,
    /// Offset of the next sub-header as stored in the file
    pub next_offset: u32,
    /// Declared payload length
    pub payload_length: u32,
    /// Resource key
    pub key: ResourceKey,
    /// Offset of the payload, immediately after the sub-header
    pub payload_offset: u64,
}

/// Number of chain steps allowed for a declared count and an early-exit
/// limit (`0` = no limit)
pub fn step_budget(resource_count: u32, max: u32) -> u32 {
    if max > 0 {
        resource_count.min(max)
    } else {
        resource_count
    }
}

/// Explicit cursor over the sub-header chain
#[derive(Debug, Clone)]
pub struct ChainCursor {
    next: u64,
    remaining: u32,
    steps: u32,
}

impl ChainCursor {
    /// Start at the header's first sub-header with the step budget for `max`
    pub fn new(header: &SndHeader, max: u32) -> Self {
        Self {
            next: u64::from(header.first_sub_header_offset),
            remaining: step_budget(header.resource_count, max),
            steps: 0,
        }
    }

    /// Steps taken so far
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Steps left in the budget
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Read the next sub-header.
    ///
    /// Returns `Ok(None)` once the budget is spent. A short sub-header is a
    /// fatal [`crate::snd::SndError::UnexpectedEndOfData`]: the chain is
    /// structurally broken past that point.
    pub fn advance<R: Read + Seek>(
        &mut self,
        cursor: &mut ArchiveCursor<R>,
    ) -> SndResult<Option<ChainEntry>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;

        let header_offset = self.next;
        cursor.seek_to(header_offset)?;
        let sub: SubHeader = cursor.read_le("sub-header")?;
        self.steps += 1;
        self.next = u64::from(sub.next_offset);

        debug!(
            "Chain step {} at {}: sound {} ({} bytes), next at {}",
            self.steps, header_offset, sub.key, sub.payload_length, sub.next_offset
        );

        Ok(Some(ChainEntry {
            header_offset,
            next_offset: sub.next_offset,
            payload_length: sub.payload_length,
            key: sub.key,
            payload_offset: cursor.position(),
        }))
    }
}
