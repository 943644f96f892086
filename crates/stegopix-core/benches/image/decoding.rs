use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use stegopix_core::media::image::{decode, encode};
use stegopix_core::CodecOptions;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let opts = CodecOptions::default().with_padding(100).with_spacing(7);
        let carrier = ImageBuffer::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, 128, 255]));
        let secret_message = vec![0x5A; 16 * 1024];
        let img = encode(carrier, &secret_message, &opts).expect("Cannot hide secret message");

        b.iter(|| {
            decode(&img, &opts).expect("Failed to unveil 16 KiB");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
