use reified_optics::reified::ReifiedIndexedGetter;

fn main() {
    let outer = ReifiedIndexedGetter::from_fn(|pair: &(i32, i32)| (0_usize, pair.0));
    let inner = ReifiedIndexedGetter::from_fn(|n: &i32| (1_usize, *n));

    let _ = outer.pipe(inner);
}
