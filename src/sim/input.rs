use bitflags::bitflags;

bitflags! {
    /// Keys held down during one tick.  Every flag is independent: holding
    /// FORWARD and BACKWARD together is legal and cancels out.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct KeyState: u8 {
        const FORWARD  = 0b0001;
        const BACKWARD = 0b0010;
        const LEFT     = 0b0100;
        const RIGHT    = 0b1000;
    }
}

impl KeyState {
    pub fn from_bools(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        let mut keys = KeyState::empty();
        keys.set(KeyState::FORWARD, forward);
        keys.set(KeyState::BACKWARD, backward);
        keys.set(KeyState::LEFT, left);
        keys.set(KeyState::RIGHT, right);
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bools_sets_each_flag() {
        let keys = KeyState::from_bools(true, false, false, true);
        assert!(keys.contains(KeyState::FORWARD | KeyState::RIGHT));
        assert!(!keys.intersects(KeyState::BACKWARD | KeyState::LEFT));
        assert_eq!(KeyState::from_bools(false, false, false, false), KeyState::empty());
    }
}
