//! Command cycle handshake
//!
//! Rendezvous between the input task (the only raiser) and the menu task
//! (the only waiter). A cycle is complete once both the `Started` and the
//! `Finished` flag have been raised, in either order. The waiter consumes a
//! complete cycle by clearing both flags in a single step, so the menu is
//! redrawn exactly once per cycle no matter how the tasks interleave.
//!
//! ```text
//!            raise(Started)            raise(Finished)
//!   Idle ─────────────────▶ StartedOnly ─────────────────▶ BothSet
//!     │                                                      ▲   │
//!     │ raise(Finished)                      raise(Started)  │   │ wait_cycle
//!     └───────────────────▶ FinishedOnly ────────────────────┘   │
//!     ▲                                                          │
//!     └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Raising a flag that is already up is a protocol violation. It is
//! reported to the raiser and leaves the state untouched.

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::{Context, Poll};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::waitqueue::WakerRegistration;

/// The two halves of a command cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleFlag {
    /// A command (or a dropped keystroke) has been dispatched
    Started,
    /// The user acknowledged the reply
    Finished,
}

/// Handshake protocol violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeError {
    /// The flag was raised again before the waiter consumed the cycle
    AlreadyRaised(CycleFlag),
}

/// Handshake states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeState {
    /// Both flags clear
    #[default]
    Idle,
    /// Only `Started` raised
    StartedOnly,
    /// Only `Finished` raised
    FinishedOnly,
    /// Cycle complete, waiting to be consumed
    BothSet,
}

impl HandshakeState {
    /// Process a raise and return the next state
    pub fn raise(self, flag: CycleFlag) -> Result<Self, HandshakeError> {
        use CycleFlag::*;
        use HandshakeState::*;

        match (self, flag) {
            (Idle, Started) => Ok(StartedOnly),
            (Idle, Finished) => Ok(FinishedOnly),
            (StartedOnly, Finished) | (FinishedOnly, Started) => Ok(BothSet),
            _ => Err(HandshakeError::AlreadyRaised(flag)),
        }
    }

    /// Check if the given flag is currently raised
    pub fn is_raised(self, flag: CycleFlag) -> bool {
        match flag {
            CycleFlag::Started => matches!(self, Self::StartedOnly | Self::BothSet),
            CycleFlag::Finished => matches!(self, Self::FinishedOnly | Self::BothSet),
        }
    }

    /// Check if a complete cycle is waiting to be consumed
    pub fn is_complete(self) -> bool {
        self == Self::BothSet
    }
}

struct Inner {
    state: HandshakeState,
    waker: WakerRegistration,
}

/// Dual-flag rendezvous between the input and menu tasks
///
/// Designed for exactly one waiter. A second concurrent waiter displaces
/// the first one's waker.
pub struct Handshake<M: RawMutex> {
    inner: Mutex<M, RefCell<Inner>>,
}

impl<M: RawMutex> Default for Handshake<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Handshake<M> {
    /// Create a handshake in the `Idle` state
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                state: HandshakeState::Idle,
                waker: WakerRegistration::new(),
            })),
        }
    }

    /// Raise the `Started` flag
    pub fn raise_started(&self) -> Result<(), HandshakeError> {
        self.raise(CycleFlag::Started)
    }

    /// Raise the `Finished` flag
    pub fn raise_finished(&self) -> Result<(), HandshakeError> {
        self.raise(CycleFlag::Finished)
    }

    /// Raise a flag, waking the waiter if this completes the cycle
    pub fn raise(&self, flag: CycleFlag) -> Result<(), HandshakeError> {
        self.inner.lock(|cell| {
            let mut inner = cell.borrow_mut();
            inner.state = inner.state.raise(flag)?;
            if inner.state.is_complete() {
                inner.waker.wake();
            }
            Ok(())
        })
    }

    /// Current state snapshot
    pub fn state(&self) -> HandshakeState {
        self.inner.lock(|cell| cell.borrow().state)
    }

    /// Consume a complete cycle without waiting
    ///
    /// Returns `true` if a cycle was consumed.
    pub fn try_take(&self) -> bool {
        self.inner.lock(|cell| {
            let mut inner = cell.borrow_mut();
            if inner.state.is_complete() {
                inner.state = HandshakeState::Idle;
                true
            } else {
                false
            }
        })
    }

    /// Wait for a complete cycle and consume it
    ///
    /// Both flags are cleared together before this returns. There is no
    /// timeout: a cycle that never completes blocks the caller forever.
    pub async fn wait_cycle(&self) {
        poll_fn(|cx| self.poll_wait_cycle(cx)).await
    }

    fn poll_wait_cycle(&self, cx: &mut Context<'_>) -> Poll<()> {
        self.inner.lock(|cell| {
            let mut inner = cell.borrow_mut();
            if inner.state.is_complete() {
                inner.state = HandshakeState::Idle;
                Poll::Ready(())
            } else {
                inner.waker.register(cx.waker());
                Poll::Pending
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_futures::select::{select, Either};
    use embassy_futures::yield_now;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};

    #[test]
    fn test_state_transitions() {
        let state = HandshakeState::Idle;

        let started = state.raise(CycleFlag::Started).unwrap();
        assert_eq!(started, HandshakeState::StartedOnly);

        let both = started.raise(CycleFlag::Finished).unwrap();
        assert_eq!(both, HandshakeState::BothSet);
        assert!(both.is_complete());
    }

    #[test]
    fn test_either_order() {
        let finished = HandshakeState::Idle.raise(CycleFlag::Finished).unwrap();
        assert_eq!(finished, HandshakeState::FinishedOnly);
        assert!(!finished.is_complete());

        let both = finished.raise(CycleFlag::Started).unwrap();
        assert_eq!(both, HandshakeState::BothSet);
    }

    #[test]
    fn test_duplicate_raise_rejected() {
        let cases = [
            (HandshakeState::StartedOnly, CycleFlag::Started),
            (HandshakeState::FinishedOnly, CycleFlag::Finished),
            (HandshakeState::BothSet, CycleFlag::Started),
            (HandshakeState::BothSet, CycleFlag::Finished),
        ];

        for (state, flag) in cases {
            assert_eq!(state.raise(flag), Err(HandshakeError::AlreadyRaised(flag)));
        }
    }

    #[test]
    fn test_is_raised() {
        assert!(HandshakeState::StartedOnly.is_raised(CycleFlag::Started));
        assert!(!HandshakeState::StartedOnly.is_raised(CycleFlag::Finished));
        assert!(HandshakeState::BothSet.is_raised(CycleFlag::Started));
        assert!(HandshakeState::BothSet.is_raised(CycleFlag::Finished));
        assert!(!HandshakeState::Idle.is_raised(CycleFlag::Started));
    }

    #[test]
    fn test_violation_leaves_state_untouched() {
        let handshake: Handshake<NoopRawMutex> = Handshake::new();
        handshake.raise_started().unwrap();

        assert_eq!(
            handshake.raise_started(),
            Err(HandshakeError::AlreadyRaised(CycleFlag::Started))
        );
        assert_eq!(handshake.state(), HandshakeState::StartedOnly);
    }

    #[test]
    fn test_try_take_consumes_once() {
        let handshake: Handshake<NoopRawMutex> = Handshake::new();
        assert!(!handshake.try_take());

        handshake.raise_started().unwrap();
        assert!(!handshake.try_take());

        handshake.raise_finished().unwrap();
        assert!(handshake.try_take());
        assert!(!handshake.try_take());
        assert_eq!(handshake.state(), HandshakeState::Idle);
    }

    #[test]
    fn test_wait_cycle_ready_immediately() {
        let handshake: Handshake<NoopRawMutex> = Handshake::new();
        handshake.raise_finished().unwrap();
        handshake.raise_started().unwrap();

        block_on(handshake.wait_cycle());
        assert_eq!(handshake.state(), HandshakeState::Idle);
    }

    #[test]
    fn test_wait_cycle_blocks_on_half_cycle() {
        let handshake: Handshake<NoopRawMutex> = Handshake::new();
        handshake.raise_started().unwrap();

        let timeout = async {
            for _ in 0..16 {
                yield_now().await;
            }
        };
        let result = block_on(select(handshake.wait_cycle(), timeout));
        assert!(matches!(result, Either::Second(())));
        assert_eq!(handshake.state(), HandshakeState::StartedOnly);
    }

    #[test]
    fn test_waiter_woken_by_second_raise() {
        let handshake: Handshake<NoopRawMutex> = Handshake::new();

        let raiser = async {
            yield_now().await;
            handshake.raise_started().unwrap();
            yield_now().await;
            handshake.raise_finished().unwrap();
        };
        block_on(join(handshake.wait_cycle(), raiser));

        assert_eq!(handshake.state(), HandshakeState::Idle);
    }

    #[test]
    fn test_cross_thread_rendezvous() {
        static HANDSHAKE: Handshake<CriticalSectionRawMutex> = Handshake::new();

        let waiter = std::thread::spawn(|| {
            for _ in 0..3 {
                block_on(HANDSHAKE.wait_cycle());
            }
        });

        for _ in 0..3 {
            HANDSHAKE.raise_started().unwrap();
            HANDSHAKE.raise_finished().unwrap();
            // Wait for the waiter to consume before starting the next cycle
            while HANDSHAKE.state() != HandshakeState::Idle {
                std::thread::yield_now();
            }
        }

        waiter.join().unwrap();
        assert_eq!(HANDSHAKE.state(), HandshakeState::Idle);
    }
}
