//! Property tests for the combat and input invariants

use badman_kombat::combat::*;
use badman_kombat::core::config::CombatConfig;
use badman_kombat::input::{InputBuffer, InputToken};
use proptest::prelude::*;

fn attack_type() -> impl Strategy<Value = AttackType> {
    prop::sample::select(AttackType::ALL.to_vec())
}

fn input_token() -> impl Strategy<Value = InputToken> {
    prop::sample::select(InputToken::ALL.to_vec())
}

fn combat_state() -> impl Strategy<Value = CombatState> {
    (0u32..20, 0u32..60, 0u32..40, 0u32..30).prop_map(|(count, timer, hitstun, blockstun)| {
        let config = CombatConfig::default();
        CombatState {
            hitstun,
            blockstun,
            combo_count: count,
            combo_scaling: config.scaling_for(count),
            last_hit_timer: timer,
            ..Default::default()
        }
    })
}

proptest! {
    #[test]
    fn damage_is_floored_product(base in 0u32..200, state in combat_state(), kind in attack_type()) {
        let damage = calculate_damage(base, &state, kind);
        let exact = base as f64 * state.combo_scaling * kind.damage_multiplier();
        prop_assert!(damage as f64 <= exact);
        prop_assert!(exact - (damage as f64) < 1.0);
    }

    #[test]
    fn hit_never_underflows_health(health in 0u32..=100, base in 0u32..500, kind in attack_type()) {
        let config = CombatConfig::default();
        let attacker = Fighter::new("BadMan", &config);
        let mut defender = Fighter::new("Jester", &config);
        defender.health = health;

        let exchange = apply_hit(&attacker, &defender, base, 12, kind, &config);
        prop_assert!(exchange.defender.health <= health);
        prop_assert_eq!(exchange.defender.health, health.saturating_sub(exchange.damage));
        prop_assert!(exchange.attacker.meter <= config.meter_max);
    }

    #[test]
    fn block_never_kills(health in 1u32..=100, damage in 0u32..1000, blockstun in 0u32..30) {
        let config = CombatConfig::default();
        let attacker = Fighter::new("BadMan", &config);
        let mut defender = Fighter::new("Jester", &config);
        defender.health = health;

        let exchange = apply_block(&attacker, &defender, damage, blockstun, &config);
        prop_assert!(exchange.defender.health >= config.block_health_floor);
        prop_assert_eq!(exchange.defender.combat.combo_count, 0);
        prop_assert_eq!(exchange.defender.combat.blockstun, blockstun);
    }

    #[test]
    fn scaling_never_increases_within_combo(hits in 1usize..25) {
        let config = CombatConfig::default();
        let attacker = Fighter::new("BadMan", &config);
        let mut defender = Fighter::new("Jester", &config);
        defender.health = u32::MAX;

        let mut previous = defender.combat.combo_scaling;
        for _ in 0..hits {
            defender = apply_hit(&attacker, &defender, 10, 12, AttackType::Medium, &config).defender;
            let scaling = defender.combat.combo_scaling;
            prop_assert!(scaling <= previous);
            prop_assert!(scaling >= config.min_combo_scaling);
            previous = scaling;
        }
    }

    #[test]
    fn meter_stays_in_range(starting in 0u32..=100, damages in prop::collection::vec((0u32..200, attack_type()), 0..20)) {
        let config = CombatConfig::default();
        let mut attacker = Fighter::new("BadMan", &config);
        attacker.meter = starting;
        let defender = Fighter::new("Jester", &config);

        for (damage, kind) in damages {
            let before = attacker.meter;
            attacker = apply_hit(&attacker, &defender, damage, 10, kind, &config).attacker;
            prop_assert!(attacker.meter <= config.meter_max);
            if kind == AttackType::Super {
                prop_assert_eq!(attacker.meter, before);
            }
        }
    }

    #[test]
    fn buffer_stays_bounded_and_ordered(tokens in prop::collection::vec((input_token(), 0u64..40), 0..60)) {
        let config = CombatConfig::default();
        let mut buffer = InputBuffer::from_config(&config);
        let mut now = 0u64;

        for (token, gap) in tokens {
            now += gap;
            buffer.record(token, now);
            prop_assert!(buffer.len() <= config.input_buffer_capacity);
            let stamps = buffer.timestamps();
            prop_assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(stamps.iter().all(|&t| t + config.input_window_ms >= now));
        }
    }

    #[test]
    fn resolution_is_deterministic(base in 0u32..100, guarding in any::<bool>(), kind in attack_type()) {
        let config = CombatConfig::default();
        let attacker = Fighter::new("BadMan", &config);
        let defender = Fighter::new("Jester", &config);
        let request = AttackRequest {
            base_damage: base,
            hitstun: 12,
            blockstun: 8,
            attack_type: kind,
        };

        let first = resolve_attack(&attacker, &defender, request, guarding, &config);
        let second = resolve_attack(&attacker, &defender, request, guarding, &config);
        prop_assert_eq!(first, second);
    }
}
