/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Operations chained on whole images

use nanorand::Rng;
use pixmill_core::color::Color;
use pixmill_core::colorspace::ColorSpace;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;
use pixmill_procs::blend::{alpha, BlendMode};
use pixmill_procs::blit::Blit;
use pixmill_procs::composite::Blend;
use pixmill_procs::draw::Canvas;
use pixmill_procs::extract_color::ExtractColor;
use pixmill_procs::flip::{Flip, FlipDirection};
use pixmill_procs::grayscale::Grayscale;
use pixmill_procs::resize::{Resize, ResizeMethod};
use pixmill_procs::utils::Gravity;
use pixmill_procs::yuv::{RgbToYuv444, Yuv444ToRgb};

const RED: Color = Color::opaque(255, 0, 0);
const BLUE: Color = Color::opaque(0, 0, 255);

#[test]
fn extract_a_drawn_circle() {
    let mut image = Image::create(40, 40, 24).unwrap();
    Canvas::new(&mut image)
        .unwrap()
        .draw_circle_filled(20, 20, 8, RED);

    let drawn: Vec<bool> = image
        .pixels()
        .chunks_exact(3)
        .map(|pix| pix == [255, 0, 0])
        .collect();

    image.execute(&ExtractColor::new(RED, 0)).unwrap();

    for (pix, was_red) in image.pixels().chunks_exact(3).zip(drawn) {
        let expected = if was_red { [255; 3] } else { [0; 3] };
        assert_eq!(pix, expected);
    }
    assert_eq!(image.pixel(20, 20), Some(Color::WHITE));
    assert_eq!(image.pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn flip_resize_and_blit() {
    let mut image = Image::fill(BLUE, ColorSpace::RGB, 8, 4).unwrap();
    // columns 0..=3
    Canvas::new(&mut image)
        .unwrap()
        .draw_rect_filled(0, 0, 3, 4, RED);
    assert_eq!(image.pixel(3, 3), Some(RED));
    assert_eq!(image.pixel(4, 0), Some(BLUE));

    Flip::new(FlipDirection::Horizontal)
        .execute(&mut image)
        .unwrap();
    assert_eq!(image.pixel(0, 0), Some(BLUE));
    assert_eq!(image.pixel(7, 0), Some(RED));

    Resize::new(16, 8, ResizeMethod::NearestNeighbor)
        .execute(&mut image)
        .unwrap();
    assert_eq!(image.dimensions(), (16, 8));
    assert_eq!(image.pixel(0, 0), Some(BLUE));
    assert_eq!(image.pixel(15, 7), Some(RED));

    let mut canvas = Image::fill(Color::BLACK, ColorSpace::RGBA, 20, 10).unwrap();
    Blit::new_gravity(&image, Gravity::BottomRight)
        .execute(&mut canvas)
        .unwrap();

    assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(canvas.pixel(4, 2), Some(BLUE));
    assert_eq!(canvas.pixel(19, 9), Some(RED));
}

#[test]
fn alpha_blend_uses_the_source_alpha() {
    let top = Image::fill(Color::new(0, 0, 0, 128), ColorSpace::RGBA, 2, 2).unwrap();
    let mut bottom = Image::fill(Color::WHITE, ColorSpace::RGBA, 4, 4).unwrap();

    Blend::new(&top, BlendMode::Alpha, (1, 1))
        .execute(&mut bottom)
        .unwrap();

    let opacity = 128.0 / 255.0;
    let level = alpha(0, 255, opacity);
    let expected = Color::new(level, level, level, alpha(128, 255, opacity));

    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        assert_eq!(bottom.pixel(x, y), Some(expected));
    }
    assert_eq!(bottom.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(bottom.pixel(3, 3), Some(Color::WHITE));
}

#[test]
fn yuv_round_trip_keeps_alpha() {
    let mut rand = nanorand::WyRand::new();
    let mut pixels = vec![0; 16 * 16 * 4];
    rand.fill(&mut pixels);

    let mut image = Image::from_u8(pixels.clone(), 16, 16, ColorSpace::RGBA).unwrap();

    image.execute(&RgbToYuv444::new()).unwrap();
    image.execute(&Yuv444ToRgb::new()).unwrap();

    for (new, old) in image.pixels().chunks_exact(4).zip(pixels.chunks_exact(4)) {
        assert_eq!(new[3], old[3]);
    }
}

#[test]
fn grayscale_then_opacity() {
    let mut image = Image::fill(Color::new(30, 60, 90, 0), ColorSpace::RGBA, 3, 3).unwrap();
    Canvas::new(&mut image)
        .unwrap()
        .set_pixel(1, 1, Color::new(10, 20, 30, 255));

    image.execute(&Grayscale::new()).unwrap();

    assert_eq!(image.pixel(0, 0), Some(Color::new(60, 60, 60, 0)));
    assert_eq!(image.pixel(1, 1), Some(Color::new(20, 20, 20, 255)));

    let opacity = image.is_opaque();
    assert!(opacity.partially_opaque);
    assert!(!opacity.completely_opaque);
}
