//! Vector and matrix benchmarks.

use core::array;

use divan::Bencher;
use divan::counter::ItemsCount;
use planar_core::prelude::*;

const N: usize = 1024;

fn points() -> [Vec2; N] {
    array::from_fn(|i| {
        let t = i as f32;
        vec2(t * 0.731 - 300.0, 250.0 - t * 0.377)
    })
}

#[divan::bench]
fn normalize(b: Bencher) {
    let pts = points();
    b.counter(ItemsCount::new(N))
        .bench_local(|| pts.map(|v| divan::black_box(v).normalize()));
}

#[divan::bench]
fn mat3_compose(b: Bencher) {
    let m = Mat3::identity().rotate(30.0).translate(vec2(5.0, -2.0));
    b.bench_local(|| divan::black_box(m).compose(&m));
}

#[divan::bench]
fn mat4_compose(b: Bencher) {
    let m = Mat4::identity().rotate(0.5).translate(vec2(5.0, -2.0));
    b.bench_local(|| divan::black_box(m).compose(&m));
}

#[divan::bench]
fn mat3_transform_chain(b: Bencher) {
    b.bench_local(|| {
        Mat3::identity()
            .translate(divan::black_box(vec2(-0.5, -0.5)))
            .scale(vec2(64.0, 32.0))
            .rotate(divan::black_box(45.0))
            .translate(vec2(400.0, 300.0))
            .then(&Mat3::ortho(800.0, 600.0))
    });
}

#[divan::bench]
fn mat3_apply(b: Bencher) {
    let pts = points();
    let m = Mat3::identity()
        .rotate(30.0)
        .then(&Mat3::ortho(800.0, 600.0));
    b.counter(ItemsCount::new(N))
        .bench_local(|| pts.map(|p| divan::black_box(m).apply(&p)));
}

#[divan::bench]
fn mat4_apply(b: Bencher) {
    let pts = points();
    let m = Mat4::ortho(0.0, 800.0, 600.0, 0.0).rotate(0.5);
    b.counter(ItemsCount::new(N))
        .bench_local(|| pts.map(|p| divan::black_box(m).apply(&p)));
}

fn main() {
    divan::main()
}
