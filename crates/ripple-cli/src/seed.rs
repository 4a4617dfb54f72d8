//! Pebble seeding: the one-time initial excitation of the lake.

use rand::Rng;
use ripple_core::Partition;
use ripple_field::Field;

/// Drop `pebbles` impulses into the worker's physical region.
///
/// Each pebble sets one cell of `energy` at a uniform random
/// `(row, col)` in `[0, n) × [0, n)` to a uniform value in `[0, 1)`,
/// offset into the slab by the partition's physical start so halo rows
/// are never seeded. Later pebbles may land on (and overwrite) earlier
/// ones. Applied once before iteration 0; the core never touches the
/// seeds again except through normal stepping.
pub fn drop_pebbles<R: Rng>(
    field: &mut Field,
    partition: &Partition,
    pebbles: usize,
    rng: &mut R,
) {
    let n = partition.side;
    for _ in 0..pebbles {
        let row = rng.random_range(0..n);
        let col = rng.random_range(0..n);
        field.set_energy(partition.physical.start + row, col, rng.random::<f32>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pebbles_land_only_in_the_physical_region() {
        let (_, upper) = Partition::pair(16).unwrap();
        let mut field = Field::for_partition(&upper);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        drop_pebbles(&mut field, &upper, 64, &mut rng);

        // Halo rows [0, 3) stay zero.
        assert!(field.energy_rows(0..3).iter().all(|&v| v == 0.0));
        // Velocity is never seeded.
        assert!(field.velocity().iter().all(|&v| v == 0.0));

        let hits = field.energy().iter().filter(|&&v| v != 0.0).count();
        assert!(hits > 0 && hits <= 64);
        assert!(field.energy().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn seeding_is_deterministic_per_seed() {
        let part = Partition::single(12).unwrap();
        let mut a = Field::for_partition(&part);
        let mut b = Field::for_partition(&part);
        drop_pebbles(&mut a, &part, 10, &mut ChaCha8Rng::seed_from_u64(42));
        drop_pebbles(&mut b, &part, 10, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_pebbles_is_a_no_op() {
        let part = Partition::single(5).unwrap();
        let mut field = Field::for_partition(&part);
        drop_pebbles(&mut field, &part, 0, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(field.energy().iter().all(|&v| v == 0.0));
    }
}
