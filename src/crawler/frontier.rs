//! Frontier for managing the crawl queue and visited set
//!
//! This module handles:
//! - First-in-first-out queue of URLs to crawl
//! - The visited set, marked at pop time
//! - The page budget, both for popping and for admitting new links
//!
//! The frontier may hold the same URL several times; duplicates are only
//! discarded when popped, against the visited set.

use std::collections::{HashSet, VecDeque};

/// Result of asking the frontier for the next URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopResult {
    /// URL was not visited before and is now marked visited
    Fresh(String),

    /// URL was already visited; it has been removed from the queue and
    /// does not count against the budget
    Duplicate(String),

    /// The queue is empty or the budget has been spent
    Exhausted,
}

/// Result of offering a discovered link to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Link appended to the back of the queue
    Enqueued,

    /// Link already visited; not queued
    AlreadyVisited,

    /// Visited plus queued URLs already reach the budget; the caller stops
    /// offering links from the current page
    BudgetReached,
}

/// FIFO frontier with a visited set and a page budget
#[derive(Debug, Clone)]
pub struct Frontier {
    /// URLs waiting to be popped, oldest first
    queue: VecDeque<String>,

    /// URLs popped for processing, whatever the fetch outcome
    visited: HashSet<String>,

    /// Maximum number of URLs that may ever be marked visited
    max_pages: usize,
}

impl Frontier {
    /// Creates a frontier seeded with `seeds` in the given order
    ///
    /// Seeds are not marked visited; that happens when they are popped.
    pub fn new<I, S>(seeds: I, max_pages: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: seeds.into_iter().map(Into::into).collect(),
            visited: HashSet::new(),
            max_pages,
        }
    }

    /// Returns true once as many URLs have been attempted as the budget allows
    pub fn budget_exhausted(&self) -> bool {
        self.visited.len() >= self.max_pages
    }

    /// Pops the next URL, marking it visited in the same step
    ///
    /// Returns [`PopResult::Exhausted`] without touching the queue when it
    /// is empty or the budget is spent.
    pub fn pop_next(&mut self) -> PopResult {
        if self.budget_exhausted() {
            return PopResult::Exhausted;
        }

        let Some(url) = self.queue.pop_front() else {
            return PopResult::Exhausted;
        };

        if self.visited.insert(url.clone()) {
            PopResult::Fresh(url)
        } else {
            PopResult::Duplicate(url)
        }
    }

    /// Offers a link discovered on a page
    ///
    /// The budget check comes first, so a page's remaining links are refused
    /// once `visited + queued` reaches the budget, even ones already visited.
    pub fn admit(&mut self, link: &str) -> Admission {
        if self.visited.len() + self.queue.len() >= self.max_pages {
            return Admission::BudgetReached;
        }

        if self.visited.contains(link) {
            return Admission::AlreadyVisited;
        }

        self.queue.push_back(link.to_string());
        Admission::Enqueued
    }

    /// Number of URLs waiting in the queue, duplicates included
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is waiting in the queue
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of URLs marked visited
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns true if `url` has been popped for processing
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// The configured page budget
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Consumes the frontier, returning the visited set
    pub fn into_visited(self) -> HashSet<String> {
        self.visited
    }
}
