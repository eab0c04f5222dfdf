//! Pipe obstacle stream
//!
//! Pipes live in a bounded queue ordered by x: the oldest (leftmost) pair is
//! at the front, new pairs are appended at the back. Everything moves at the
//! same speed, so the order never changes and retirement only has to look at
//! the front.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, DifficultyProfile};
use super::rect::Rect;
use crate::consts::*;

/// One top + bottom obstacle sharing a gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipePair {
    /// Hangs from the ceiling down to the gap
    pub top: Rect,
    /// Rises from the gap to the bottom of the screen
    pub bottom: Rect,
    /// Top edge of the gap
    pub gap_y: i32,
    /// Whether this pair already counted toward the score
    pub scored: bool,
}

impl PipePair {
    /// Pair whose two pipes share one width
    pub fn new(x: f32, width: f32, gap_y: i32, gap_size: i32) -> Self {
        Self::with_widths(x, width, width, gap_y, gap_size)
    }

    /// Pair whose pipes come from textures of different widths. Position,
    /// retirement and scoring follow the top pipe.
    pub fn with_widths(
        x: f32,
        top_width: f32,
        bottom_width: f32,
        gap_y: i32,
        gap_size: i32,
    ) -> Self {
        let bottom_y = (gap_y + gap_size) as f32;
        Self {
            top: Rect::new(x, 0.0, top_width, gap_y as f32),
            bottom: Rect::new(x, bottom_y, bottom_width, SCREEN_HEIGHT - bottom_y),
            gap_y,
            scored: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.top.left()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    pub fn translate(&mut self, dx: f32) {
        self.top.translate_x(dx);
        self.bottom.translate_x(dx);
    }

    /// Collision boxes (narrower than the sprites, full height)
    pub fn collision_boxes(&self) -> [Rect; 2] {
        [
            self.top.inset(PIPE_INSET_X, 0.0),
            self.bottom.inset(PIPE_INSET_X, 0.0),
        ]
    }
}

/// Bounded FIFO of pipe pairs, sorted by x ascending
#[derive(Debug, Clone, Default)]
pub struct PipeQueue {
    pipes: VecDeque<PipePair>,
}

impl PipeQueue {
    pub fn new() -> Self {
        Self {
            pipes: VecDeque::with_capacity(MAX_PIPES),
        }
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pipes.len() >= MAX_PIPES
    }

    /// Append a pair. Returns false (and drops the pair) when at capacity.
    ///
    /// The pair must not be left of the current back.
    pub fn push_back(&mut self, pair: PipePair) -> bool {
        if self.is_full() {
            return false;
        }
        debug_assert!(self.back().is_none_or(|b| b.x() <= pair.x()));
        self.pipes.push_back(pair);
        true
    }

    pub fn pop_front(&mut self) -> Option<PipePair> {
        self.pipes.pop_front()
    }

    pub fn front(&self) -> Option<&PipePair> {
        self.pipes.front()
    }

    pub fn back(&self) -> Option<&PipePair> {
        self.pipes.back()
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PipePair> {
        self.pipes.iter_mut()
    }

    /// True when x positions are ascending front to back
    pub fn is_sorted(&self) -> bool {
        self.pipes
            .iter()
            .zip(self.pipes.iter().skip(1))
            .all(|(a, b)| a.x() <= b.x())
    }
}

/// Spawning, scrolling, retiring and scoring of pipes
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    pub queue: PipeQueue,
    /// Rendered width of the top pipe
    pub pipe_width: f32,
    /// Rendered width of the bottom pipe
    pub bottom_width: f32,
    /// Alternating pattern: whether the next gap is the high one
    next_gap_high: bool,
}

impl ObstacleStream {
    pub fn new(pipe_width: f32) -> Self {
        Self::with_widths(pipe_width, pipe_width)
    }

    pub fn with_widths(pipe_width: f32, bottom_width: f32) -> Self {
        Self {
            queue: PipeQueue::new(),
            pipe_width,
            bottom_width,
            next_gap_high: true,
        }
    }

    /// Empty the stream and restart the gap pattern at "high"
    pub fn reset(&mut self) {
        self.queue.clear();
        self.next_gap_high = true;
    }

    /// Whether the next alternating gap will be the high one
    pub fn next_gap_high(&self) -> bool {
        self.next_gap_high
    }

    /// Pick the gap offset for the next spawn
    pub fn next_gap_y<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        profile: &DifficultyProfile,
        rng: &mut R,
    ) -> i32 {
        let max_gap = profile.max_gap_y();
        let range = max_gap - MIN_GAP_Y;
        if difficulty.alternating_gaps() {
            let gap_y = if self.next_gap_high {
                MIN_GAP_Y + range / 4
            } else {
                MIN_GAP_Y + (3 * range) / 4
            };
            self.next_gap_high = !self.next_gap_high;
            gap_y
        } else {
            rng.random_range(MIN_GAP_Y..=max_gap)
        }
    }

    /// Spawn a pair if the stream is empty or the newest pair has scrolled
    /// far enough. Returns the new gap offset when a pair was added.
    pub fn spawn<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        profile: &DifficultyProfile,
        rng: &mut R,
    ) -> Option<i32> {
        let due = self
            .queue
            .back()
            .is_none_or(|last| last.x() <= SCREEN_WIDTH - profile.spawn_interval as f32);
        if !due || self.queue.is_full() {
            return None;
        }

        let gap_y = self.next_gap_y(difficulty, profile, rng);
        let pair = PipePair::with_widths(
            SCREEN_WIDTH,
            self.pipe_width,
            self.bottom_width,
            gap_y,
            profile.gap_size,
        );
        self.queue.push_back(pair);
        log::debug!("Spawned pipe (gap_y={}, count={})", gap_y, self.queue.len());
        Some(gap_y)
    }

    /// Scroll every pair horizontally
    pub fn advance(&mut self, speed: f32) {
        for pair in self.queue.iter_mut() {
            pair.translate(speed);
        }
    }

    /// Evict the front pair once it is completely off the left edge
    pub fn retire(&mut self) -> Option<PipePair> {
        if self.queue.front().is_some_and(|p| p.right() < 0.0) {
            self.queue.pop_front()
        } else {
            None
        }
    }

    /// Mark every pair the bird has cleared. Returns how many were newly
    /// scored.
    pub fn score(&mut self, bird_x: f32) -> u32 {
        let mut scored = 0;
        for pair in self.queue.iter_mut() {
            if !pair.scored && pair.right() < bird_x {
                pair.scored = true;
                scored += 1;
            }
        }
        scored
    }
}
