use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixbox_image::Image;
use pixbox_imgproc::filter::box_average_with_strategy;
use pixbox_imgproc::parallel::ExecutionStrategy;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Box Average");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 7, 9].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            // input image
            let image_data = (0..width * height * 4).map(|v| (v % 256) as u8).collect();
            let image_size = [*width, *height].into();

            let image = Image::<u8, 4>::new(image_size, image_data).unwrap();
            let output = Image::<u8, 4>::from_size_val(image_size, 0).unwrap();

            group.bench_with_input(
                BenchmarkId::new("box_average_serial", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        black_box(box_average_with_strategy(
                            src,
                            &mut dst,
                            *kernel_size,
                            ExecutionStrategy::Serial,
                        ))
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("box_average_parallel_rows", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        black_box(box_average_with_strategy(
                            src,
                            &mut dst,
                            *kernel_size,
                            ExecutionStrategy::ParallelRows,
                        ))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
