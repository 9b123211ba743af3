//! Score vectors shared by the language and emotion detectors.
//!
//! Both detectors count votes per tag and pick the strictly highest count. Equal counts
//! resolve to whichever tag is declared first in [`Tag::ALL`], so the order of that slice
//! is part of each detector's observable behaviour.

use std::fmt;

/// A closed, ordered set of classification tags.
pub trait Tag: Copy + Eq + fmt::Debug + 'static {
    /// Every tag, in tie-break order.
    const ALL: &'static [Self];

    /// Position of the tag inside [`Tag::ALL`].
    fn index(self) -> usize;
}

/// Per-call vote counts, one slot per tag.
#[derive(Debug, Clone)]
pub struct ScoreVector<T: Tag> {
    scores: Vec<u32>,
    _tag: std::marker::PhantomData<T>,
}

impl<T: Tag> Default for ScoreVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tag> ScoreVector<T> {
    pub fn new() -> Self {
        ScoreVector {
            scores: vec![0; T::ALL.len()],
            _tag: std::marker::PhantomData,
        }
    }

    pub fn add(&mut self, tag: T, points: u32) {
        self.scores[tag.index()] += points;
    }

    pub fn get(&self, tag: T) -> u32 {
        self.scores[tag.index()]
    }

    /// Tag with the strictly highest score, or `None` when nothing scored at all.
    pub fn leader(&self) -> Option<(T, u32)> {
        let mut leader = None;
        let mut highest = 0;
        for &tag in T::ALL {
            let score = self.get(tag);
            if score > highest {
                highest = score;
                leader = Some(tag);
            }
        }
        leader.map(|tag| (tag, highest))
    }

    /// Leader if its score reaches `threshold`, otherwise `fallback`.
    pub fn pick(&self, threshold: u32, fallback: T) -> T {
        match self.leader() {
            Some((tag, score)) if score >= threshold => tag,
            _ => fallback,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, u32)> + '_ {
        T::ALL.iter().map(move |&tag| (tag, self.get(tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Colour {
        Red,
        Green,
        Blue,
    }

    impl Tag for Colour {
        const ALL: &'static [Self] = &[Colour::Red, Colour::Green, Colour::Blue];

        fn index(self) -> usize {
            self as usize
        }
    }

    #[test]
    fn empty_vector_has_no_leader() {
        let scores = ScoreVector::<Colour>::new();
        assert_eq!(scores.leader(), None);
        assert_eq!(scores.pick(1, Colour::Blue), Colour::Blue);
    }

    #[test]
    fn strictly_highest_score_wins() {
        let mut scores = ScoreVector::new();
        scores.add(Colour::Red, 1);
        scores.add(Colour::Blue, 3);
        assert_eq!(scores.leader(), Some((Colour::Blue, 3)));
    }

    #[test]
    fn ties_go_to_first_declared_tag() {
        let mut scores = ScoreVector::new();
        scores.add(Colour::Blue, 2);
        scores.add(Colour::Green, 2);
        assert_eq!(scores.leader(), Some((Colour::Green, 2)));
    }

    #[test]
    fn threshold_forces_fallback() {
        let mut scores = ScoreVector::new();
        scores.add(Colour::Green, 1);
        assert_eq!(scores.pick(2, Colour::Red), Colour::Red);
        assert_eq!(scores.pick(1, Colour::Red), Colour::Green);
    }
}
