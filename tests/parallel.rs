use cryptal_argon2::derivation::{Argon2Params, Schedule, Variant, argon2};

fn run(variant: Variant, lanes: u32, schedule: Schedule) -> Vec<u8> {
    let params = Argon2Params {
        mem_kib: 16 * lanes,
        time: 2,
        lanes,
        tag_len: 32,
        secret: Some(b"secret".to_vec()),
        associated_data: None,
        schedule,
    };
    argon2(variant, b"password", b"saltsaltsalt", &params).unwrap()
}

#[test]
fn schedules_agree_for_every_lane_count() {
    for variant in [Variant::Argon2d, Variant::Argon2i, Variant::Argon2id] {
        for lanes in [1, 2, 4, 8] {
            assert_eq!(
                run(variant, lanes, Schedule::Sequential),
                run(variant, lanes, Schedule::Parallel),
                "{variant:?} with {lanes} lanes"
            );
        }
    }
}

#[test]
fn parallel_runs_are_repeatable() {
    let first = run(Variant::Argon2id, 8, Schedule::Parallel);
    for _ in 0..4 {
        assert_eq!(run(Variant::Argon2id, 8, Schedule::Parallel), first);
    }
}

#[test]
fn concurrent_callers_do_not_interfere() {
    let expected = run(Variant::Argon2id, 4, Schedule::Parallel);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| run(Variant::Argon2id, 4, Schedule::Parallel)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
