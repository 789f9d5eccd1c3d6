use proptest::prelude::*;
use schemjson_blocks::{PaletteKind, PaletteMapper, TextureTable};
use schemjson_model::{Grid, RngJitter, build, max_coord, prune, rescale};

fn block() -> impl Strategy<Value = u8> {
    prop_oneof![
        3 => Just(0u8),
        1 => Just(1u8),
        1 => Just(35u8),
        1 => Just(44u8),
        1 => Just(159u8),
    ]
}

fn grid() -> impl Strategy<Value = Grid> {
    (1usize..6, 1usize..48, 1usize..6).prop_flat_map(|(w, h, l)| {
        let n = w * h * l;
        (
            proptest::collection::vec(block(), n),
            proptest::collection::vec(0u8..16, n),
        )
            .prop_map(move |(blocks, data)| Grid::new(w, h, l, blocks, data).unwrap())
    })
}

proptest! {
    // Every box is ordered before and after rescaling
    #[test]
    fn boxes_stay_ordered(g in grid(), seed in any::<u64>()) {
        let mut built = build(&g, &PaletteMapper::default(), true, &mut RngJitter::seeded(seed));
        prop_assert_eq!(built.cuboids.len(), g.non_air_count());
        prop_assert!(built.cuboids.iter().all(|c| c.bounds().is_ordered()));
        rescale(&mut built.cuboids, 32.0);
        prop_assert!(built.cuboids.iter().all(|c| c.bounds().is_ordered()));
        prop_assert!(built.cuboids.iter().all(|c| c.from.to_array().iter().all(|&v| v >= 0.0)));
    }

    // UV jitter is uniform within a cuboid and inside [0, 16)
    #[test]
    fn uv_uniform_per_cuboid(g in grid(), seed in any::<u64>()) {
        let built = build(&g, &PaletteMapper::default(), true, &mut RngJitter::seeded(seed));
        for c in &built.cuboids {
            let first = c.faces.iter().next().unwrap().1.clone();
            prop_assert!(first.uv.iter().all(|&u| u == first.uv[0] && (0.0..16.0).contains(&u)));
            prop_assert!(c.faces.iter().all(|(_, f)| *f == first));
        }
    }

    // Pruned keys equal used keys when the palette covers every block
    #[test]
    fn pruned_keys_match_used(g in grid(), kind in prop_oneof![Just(PaletteKind::Basic), Just(PaletteKind::Extended)]) {
        let built = build(&g, &PaletteMapper::new(kind), false, &mut schemjson_model::NoJitter);
        let table = prune(&TextureTable::for_kind(kind), &built.used_keys);
        let mut keys: Vec<String> = table.keys().map(str::to_string).collect();
        let mut used: Vec<String> = built.used_keys.iter().cloned().collect();
        keys.sort();
        used.sort();
        prop_assert_eq!(keys, used);
    }

    // A second pass changes nothing once the model fits
    #[test]
    fn rescale_idempotent_once_within_bound(g in grid()) {
        let mut cuboids = build(&g, &PaletteMapper::default(), false, &mut schemjson_model::NoJitter).cuboids;
        rescale(&mut cuboids, 32.0);
        prop_assume!(max_coord(&cuboids) <= 32.0);
        let once = cuboids.clone();
        prop_assert!(rescale(&mut cuboids, 32.0).is_none());
        prop_assert_eq!(cuboids, once);
    }
}
