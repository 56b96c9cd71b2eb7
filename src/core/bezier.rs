//! Bézier-Auswertung beliebigen Grades (Bernstein-Form und De Casteljau).
//!
//! Alle Funktionen sind rein und ohne Seiteneffekte. Der Grad ergibt sich aus
//! der Anzahl der Kontrollpunkte: `n = points.len() - 1`.

use super::CurveError;
use glam::DVec2;

/// Binomialkoeffizient C(n, k) als Gleitkommazahl (multiplikative Form).
///
/// Für `k > n` ist das Ergebnis 0.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    // Symmetrie nutzen: C(n, k) == C(n, n-k)
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 1..=k {
        result *= (n - k + i) as f64 / i as f64;
    }
    result
}

/// Bernstein-Basispolynom b_{i,n}(t) = C(n,i)·(1-t)^(n-i)·t^i.
pub fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32)
}

/// B(t) = Σ C(n,i)·(1-t)^(n-i)·t^i·P_i
///
/// Gilt für beliebige `t`, auch außerhalb von [0,1] (Extrapolation).
/// Bei leerer Punktliste: [`CurveError::EmptyControlSet`].
pub fn evaluate(t: f64, points: &[DVec2]) -> Result<DVec2, CurveError> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlSet);
    }
    let n = points.len() - 1;
    Ok(points
        .iter()
        .enumerate()
        .fold(DVec2::ZERO, |acc, (i, p)| acc + bernstein(n, i, t) * *p))
}

/// Wertet die Kurve an `count` gleichmäßig verteilten Parametern in
/// [0, `t_max`] aus (beide Enden inklusiv).
///
/// `count == 1` liefert nur B(0), `count == 0` eine leere Liste.
pub fn sample(points: &[DVec2], count: usize, t_max: f64) -> Result<Vec<DVec2>, CurveError> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlSet);
    }
    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![evaluate(0.0, points)?]),
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| evaluate(i as f64 / last * t_max, points))
                .collect()
        }
    }
}

/// De-Casteljau-Konstruktion bei Parameter `t`.
///
/// Liefert alle Interpolationsstufen: Stufe 0 sind die Kontrollpunkte selbst,
/// jede weitere Stufe hat einen Punkt weniger, die letzte Stufe enthält genau
/// den Kurvenpunkt B(t).
pub fn de_casteljau_levels(t: f64, points: &[DVec2]) -> Result<Vec<Vec<DVec2>>, CurveError> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlSet);
    }
    let mut levels = Vec::with_capacity(points.len());
    levels.push(points.to_vec());
    while let Some(prev) = levels.last().filter(|level| level.len() > 1) {
        let next = prev.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
        levels.push(next);
    }
    Ok(levels)
}
