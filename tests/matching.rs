use std::collections::HashSet;
use pretty_assertions::assert_eq;
use rgb::RGB8;
use colormap_match::{colorcycle, colormap, distance, lookup, match_palette,
                     names, remap, resample, Category, Error, InvalidArgument,
                     MatchOptions, Metric, Weights};

fn all_metrics() -> Vec<Metric> {
    vec![Metric::Euclidean, Metric::FastPerceptual, Metric::Perceptual,
         Metric::Weighted(Weights::new(0.5, 1., 2.).unwrap())]
}

#[test]
fn primaries_against_primaries_and_white() {
    let source = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];
    let reference = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.], [1., 1., 1.]];
    for m in all_metrics() {
        let idx = match_palette(&source, &reference, m, false).unwrap();
        assert_eq!(idx, vec![0, 1, 2], "{m:?}");
    }
}

#[test]
fn two_reds_compete_for_one_red() {
    let source = [[1., 0., 0.], [0.9, 0., 0.]];
    let reference = [[1., 0., 0.], [0., 0., 0.]];
    let idx = MatchOptions::new().exclusive(true).run(&source, &reference)
        .unwrap();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn equal_distances_pick_the_first_reference() {
    let c = [0.5, 0.2, 0.5];
    let r0 = [0.5, 0.2, 0.]; // blue channel 0.5 below
    let r1 = [0.5, 0.2, 1.]; // blue channel 0.5 above
    let m = Metric::Euclidean;
    assert_eq!(distance(&c, &r0, m), distance(&c, &r1, m));
    assert_eq!(match_palette(&[c], &[r0, r1], m, false).unwrap(), vec![0]);
}

#[test]
fn every_colormap_maps_onto_xterm() {
    let xterm: Vec<RGB8> = colorcycle("xterm").unwrap();
    for category in [Category::Qualitative, Category::Sequential,
                     Category::Diverging, Category::Monocolor] {
        for name in names(category) {
            let cmap: Vec<RGB8> = colormap(name, 64).unwrap();
            for m in all_metrics() {
                let idx = match_palette(&cmap, &xterm, m, false).unwrap();
                assert_eq!(idx.len(), 64);
                assert!(idx.iter().all(|&i| i < xterm.len()));
                let idx = match_palette(&cmap, &xterm, m, true).unwrap();
                let distinct: HashSet<_> = idx.iter().copied().collect();
                assert_eq!(distinct.len(), 64, "{name} {m:?}");
            }
        }
    }
}

#[test]
fn xterm_colors_match_themselves() {
    // xterm repeats some colors: black, the primaries and white appear
    // both among the system colors and in the color cube.
    let xterm: Vec<RGB8> = colorcycle("xterm").unwrap();
    for m in all_metrics() {
        let idx = match_palette(&xterm, &xterm, m, false).unwrap();
        for (i, &j) in idx.iter().enumerate() {
            assert_eq!(xterm[j], xterm[i]);
            assert!(j <= i);
        }
        assert_eq!(idx[16], 0);
        assert_eq!(idx[231], 15);
        // Exclusive matching cannot reuse entries, so it is the identity.
        let idx = match_palette(&xterm, &xterm, m, true).unwrap();
        assert_eq!(idx, (0 .. 256).collect::<Vec<_>>());
    }
}

#[test]
fn brewer_set_on_tue() {
    let paired: Vec<RGB8> = lookup("Paired").unwrap().colors();
    let tue: Vec<RGB8> = colorcycle("tue").unwrap();
    let idx = match_palette(&paired, &tue, Metric::Perceptual, true).unwrap();
    let applied = remap(&idx, &tue).unwrap();
    assert_eq!(applied.len(), paired.len());
    let distinct: HashSet<_> = applied.iter().collect();
    assert_eq!(distinct.len(), paired.len());
    // Sharing can only bring each color closer to its match.
    let shared = match_palette(&paired, &tue, Metric::Perceptual, false).unwrap();
    for (i, c) in paired.iter().enumerate() {
        let m = Metric::Perceptual;
        assert!(distance(c, &tue[shared[i]], m) <= distance(c, &tue[idx[i]], m));
    }
}

#[test]
fn insufficient_reference_in_exclusive_mode() {
    let tue: Vec<RGB8> = colorcycle("tue").unwrap();
    let set1: Vec<RGB8> = lookup("Set1").unwrap().colors();
    assert_eq!(match_palette(&tue, &set1, Metric::Euclidean, true),
               Err(Error::InvalidArgument(
                   InvalidArgument::InsufficientReference {
                       colors: 13, available: 9 })));
}

#[test]
fn resampled_colormap_keeps_its_ends() {
    let rdbu = lookup::<[f64; 3]>("RdBu").unwrap();
    let c = rdbu.colors();
    let r = resample(&c, 100).unwrap();
    assert_eq!(r[0], c[0]);
    assert_eq!(r[99], c[10]);
    assert_eq!(rdbu.resample(100).unwrap(), r);
}

#[test]
fn unknown_names() {
    assert_eq!(colormap::<RGB8>("Viridis", 8).err(),
               Some(Error::NotFound("Viridis".to_string())));
    assert_eq!(colorcycle::<RGB8>("xterm256").err(),
               Some(Error::NotFound("xterm256".to_string())));
}
