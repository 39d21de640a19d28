//! Unit tests for cw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CityId};

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CityId(0) < CityId(1));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    fn too_large_for_u32_is_rejected() {
        assert!(CityId::try_from(u64::MAX as usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
        assert_eq!(AgentId(3).to_string(), "AgentId(3)");
    }
}

#[cfg(test)]
mod turn {
    use crate::{GameConfig, Turn};

    #[test]
    fn next_and_add() {
        assert_eq!(Turn::ZERO.next(), Turn(1));
        assert_eq!(Turn(5) + 3, Turn(8));
    }

    #[test]
    fn display() {
        assert_eq!(Turn(12).to_string(), "T12");
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_turn(), Turn(cfg.total_turns));
    }

    #[test]
    fn zero_turns_rejected() {
        let cfg = GameConfig { seed: 1, total_turns: 0 };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn choose_stays_in_slice() {
        let mut rng = AgentRng::new(7, AgentId(0));
        let items = [10, 20, 30];
        for _ in 0..50 {
            let pick = *rng.choose(&items).unwrap();
            assert!(items.contains(&pick));
        }
    }
}
