use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use stegopix_core::media::image::encode_into;
use stegopix_core::CodecOptions;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let opts = CodecOptions::default().with_padding(100).with_spacing(7);
        let mut plain_image: RgbaImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, 128, 255]));
        let secret_message = vec![0x5A; 16 * 1024];

        b.iter(|| {
            encode_into(&mut plain_image, &secret_message, &opts)
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
