// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_popover::placement::{ideal_side, place};
use understory_popover::popover::{DynamicPopover, GeometryProvider, PopoverEvent, PopoverOptions};
use understory_popover::types::{PlacementRequest, Side};

fn gen_targets(n: usize, viewport: Size) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    let (cw, ch) = (viewport.width / n as f64, viewport.height / n as f64);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::from_origin_size(
                (x as f64 * cw, y as f64 * ch),
                (cw * 0.5, ch * 0.5),
            ));
        }
    }
    out
}

struct Grid {
    targets: Vec<Rect>,
    floating: Rect,
    viewport: Size,
}

impl GeometryProvider<usize> for Grid {
    fn bounding_rect(&self, element: &usize) -> Option<Rect> {
        if *element == usize::MAX {
            Some(self.floating)
        } else {
            self.targets.get(*element).copied()
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        0.0
    }
}

fn bench_placement(c: &mut Criterion) {
    let viewport = Size::new(1920.0, 1080.0);
    let floating = Rect::from_origin_size((0.0, 0.0), (240.0, 160.0));
    let mut group = c.benchmark_group("placement");
    for &n in &[16_usize, 64] {
        let targets = gen_targets(n, viewport);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("ideal_side_n{}", n), |b| {
            b.iter(|| {
                let mut flips = 0_usize;
                for &target in &targets {
                    for side in Side::ALL {
                        if ideal_side(side, viewport, target, floating, 0.0, 0.0) != side {
                            flips += 1;
                        }
                    }
                }
                black_box(flips);
            });
        });

        group.bench_function(format!("place_n{}", n), |b| {
            b.iter(|| {
                for &target in &targets {
                    let res = place(&PlacementRequest {
                        side: Side::Top,
                        mobile_side: Side::Left,
                        target,
                        floating,
                        viewport,
                        additional_gap: 4.0,
                        ..Default::default()
                    });
                    black_box(res);
                }
            });
        });

        let grid = Grid {
            targets,
            floating,
            viewport,
        };
        group.bench_function(format!("popover_hover_cycle_n{}", n), |b| {
            b.iter(|| {
                for i in 0..n * n {
                    let mut p = DynamicPopover::new(
                        i,
                        usize::MAX,
                        PopoverOptions {
                            use_ideal_side: true,
                            ..Default::default()
                        },
                    );
                    p.mount(&grid);
                    p.handle(PopoverEvent::PointerEnter, &grid, Duration::ZERO);
                    p.tick(Duration::from_millis(16));
                    black_box(p.style());
                    p.handle(PopoverEvent::PointerLeave, &grid, Duration::from_millis(400));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
