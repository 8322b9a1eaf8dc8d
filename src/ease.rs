//! Easing curves mapping normalized progress to normalized progress.
//!
//! Curves start at (or very near) `0.0` and end at (or very near) `1.0`.
//! The `back` and `elastic` families overshoot in between. [`linear`] is the default
//! wherever an easing is optional.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub type Ease = fn(f32) -> f32;

const B1: f32 = 1.0 / 2.75;
const B2: f32 = 2.0 / 2.75;
const B3: f32 = 1.5 / 2.75;
const B4: f32 = 2.5 / 2.75;
const B5: f32 = 2.25 / 2.75;
const B6: f32 = 2.625 / 2.75;

const BACK: f32 = 1.70158;
const ELASTIC_PERIOD: f32 = 0.4;

pub fn linear(t: f32) -> f32 {
	t
}

pub fn quad_in(t: f32) -> f32 {
	t * t
}

pub fn quad_out(t: f32) -> f32 {
	t * (2.0 - t)
}

pub fn quad_in_out(t: f32) -> f32 {
	if t <= 0.5 {
		t * t * 2.0
	} else {
		let u = t - 1.0;
		1.0 - u * u * 2.0
	}
}

pub fn cube_in(t: f32) -> f32 {
	t * t * t
}

pub fn cube_out(t: f32) -> f32 {
	let u = t - 1.0;
	1.0 + u * u * u
}

pub fn cube_in_out(t: f32) -> f32 {
	if t <= 0.5 {
		t * t * t * 4.0
	} else {
		let u = t - 1.0;
		1.0 + u * u * u * 4.0
	}
}

pub fn quart_in(t: f32) -> f32 {
	t * t * t * t
}

pub fn quart_out(t: f32) -> f32 {
	let u = t - 1.0;
	1.0 - u * u * u * u
}

pub fn quart_in_out(t: f32) -> f32 {
	if t <= 0.5 {
		t * t * t * t * 8.0
	} else {
		let u = t * 2.0 - 2.0;
		(1.0 - u * u * u * u) / 2.0 + 0.5
	}
}

pub fn quint_in(t: f32) -> f32 {
	t * t * t * t * t
}

pub fn quint_out(t: f32) -> f32 {
	let u = t - 1.0;
	u * u * u * u * u + 1.0
}

pub fn quint_in_out(t: f32) -> f32 {
	let s = t * 2.0;
	if s < 1.0 {
		s * s * s * s * s / 2.0
	} else {
		let u = s - 2.0;
		(u * u * u * u * u + 2.0) / 2.0
	}
}

pub fn sine_in(t: f32) -> f32 {
	1.0 - (FRAC_PI_2 * t).cos()
}

pub fn sine_out(t: f32) -> f32 {
	(FRAC_PI_2 * t).sin()
}

pub fn sine_in_out(t: f32) -> f32 {
	0.5 - (PI * t).cos() / 2.0
}

pub fn bounce_in(t: f32) -> f32 {
	1.0 - bounce_out(1.0 - t)
}

pub fn bounce_out(t: f32) -> f32 {
	if t < B1 {
		7.5625 * t * t
	} else if t < B2 {
		7.5625 * (t - B3) * (t - B3) + 0.75
	} else if t < B4 {
		7.5625 * (t - B5) * (t - B5) + 0.9375
	} else {
		7.5625 * (t - B6) * (t - B6) + 0.984375
	}
}

pub fn bounce_in_out(t: f32) -> f32 {
	if t < 0.5 {
		(1.0 - bounce_out(1.0 - t * 2.0)) / 2.0
	} else {
		bounce_out(t * 2.0 - 1.0) / 2.0 + 0.5
	}
}

pub fn circ_in(t: f32) -> f32 {
	1.0 - (1.0 - t * t).sqrt()
}

pub fn circ_out(t: f32) -> f32 {
	let u = t - 1.0;
	(1.0 - u * u).sqrt()
}

pub fn circ_in_out(t: f32) -> f32 {
	if t <= 0.5 {
		((1.0 - t * t * 4.0).sqrt() - 1.0) / -2.0
	} else {
		let u = t * 2.0 - 2.0;
		((1.0 - u * u).sqrt() + 1.0) / 2.0
	}
}

pub fn expo_in(t: f32) -> f32 {
	2f32.powf(10.0 * (t - 1.0))
}

pub fn expo_out(t: f32) -> f32 {
	1.0 - 2f32.powf(-10.0 * t)
}

pub fn expo_in_out(t: f32) -> f32 {
	if t < 0.5 {
		2f32.powf(10.0 * (t * 2.0 - 1.0)) / 2.0
	} else {
		(2.0 - 2f32.powf(-10.0 * (t * 2.0 - 1.0))) / 2.0
	}
}

pub fn back_in(t: f32) -> f32 {
	t * t * ((BACK + 1.0) * t - BACK)
}

pub fn back_out(t: f32) -> f32 {
	let u = t - 1.0;
	1.0 - u * u * (-(BACK + 1.0) * u - BACK)
}

pub fn back_in_out(t: f32) -> f32 {
	let s = t * 2.0;
	if s < 1.0 {
		s * s * ((BACK + 1.0) * s - BACK) / 2.0
	} else {
		let u = s - 2.0;
		(1.0 - u * u * (-(BACK + 1.0) * u - BACK)) / 2.0 + 0.5
	}
}

// With unit amplitude the phase shift reduces to a quarter period.
pub fn elastic_in(t: f32) -> f32 {
	let u = t - 1.0;
	-(2f32.powf(10.0 * u) * ((u - ELASTIC_PERIOD / 4.0) * TAU / ELASTIC_PERIOD).sin())
}

pub fn elastic_out(t: f32) -> f32 {
	2f32.powf(-10.0 * t) * ((t - ELASTIC_PERIOD / 4.0) * TAU / ELASTIC_PERIOD).sin() + 1.0
}

pub fn elastic_in_out(t: f32) -> f32 {
	let u = t - 0.5;
	let wave = ((u - ELASTIC_PERIOD / 4.0) * TAU / ELASTIC_PERIOD).sin();
	if t < 0.5 {
		-0.5 * 2f32.powf(10.0 * u) * wave
	} else {
		2f32.powf(-10.0 * u) * wave * 0.5 + 1.0
	}
}
