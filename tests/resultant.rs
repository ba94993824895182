use polyres::{
    domains::{
        integer::{Integer, IntegerRing, Z},
        rational::{Rational, Q},
        Ring,
    },
    poly::{
        polynomial::PolynomialRing,
        resultant::SubresultantStrategy,
        univariate::{UnivariatePolynomial, UnivariatePolynomialRing},
        Variable,
    },
    state::State,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const STRATEGIES: [SubresultantStrategy; 3] = [
    SubresultantStrategy::Generic,
    SubresultantStrategy::Lazard,
    SubresultantStrategy::Ducos,
];

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("POLYRES_LOG"))
        .with_test_writer()
        .try_init();
}

fn int_poly(var: Variable, coeffs: &[i64]) -> UnivariatePolynomial<IntegerRing> {
    UnivariatePolynomial::from_coefficients(Z, var, coeffs.iter().map(|c| Integer::new(*c)).collect())
}

fn random_poly(rng: &mut StdRng, var: Variable, max_degree: usize) -> UnivariatePolynomial<IntegerRing> {
    let d = rng.gen_range(1..=max_degree);
    let mut coeffs: Vec<Integer> = (0..d).map(|_| Z.sample(rng, (-4, 5))).collect();
    coeffs.push(Integer::new([-2, -1, 1, 2][rng.gen_range(0..4)]));
    UnivariatePolynomial::from_coefficients(Z, var, coeffs)
}

#[test]
fn elimination_with_multivariate_coefficients() {
    init_logging();

    let ring: PolynomialRing<_> = PolynomialRing::new(Z);
    let x_var = State::get_variable("elim_x");
    let y_var = State::get_variable("elim_y");
    let (x, y) = (ring.variable(x_var), ring.variable(y_var));
    let one = ring.one();

    // intersect the unit circle with the line x = y
    let circle = &(&x.pow(2) + &y.pow(2)) - &one;
    let line = &x - &y;
    let expected = &y.pow(2).mul_coeff(2.into()) - &one;

    for s in STRATEGIES {
        let r = circle
            .to_univariate(x_var)
            .resultant(&line.to_univariate(x_var), s);
        assert_eq!(r, expected);
    }

    // eliminating y instead gives the same polynomial in x
    let expected_x = &x.pow(2).mul_coeff(2.into()) - &one;
    let r = circle
        .to_univariate(y_var)
        .resultant(&line.to_univariate(y_var), SubresultantStrategy::Ducos);
    assert_eq!(r, expected_x);
}

#[test]
fn generic_cubic_discriminant() {
    init_logging();

    let ring: PolynomialRing<_> = PolynomialRing::new(Z);
    let x_var = State::get_variable("cubic_x");
    let [a, b, c, d] = ["cubic_a", "cubic_b", "cubic_c", "cubic_d"]
        .map(|n| ring.variable(State::get_variable(n)));
    let x = ring.variable(x_var);

    // a*x^3 + b*x^2 + c*x + d
    let f = &(&(&a * &x.pow(3)) + &(&b * &x.pow(2))) + &(&(&c * &x) + &d);

    // b^2 c^2 - 4 a c^3 - 4 b^3 d - 27 a^2 d^2 + 18 a b c d
    let terms = [
        (&b.pow(2) * &c.pow(2)).mul_coeff(1.into()),
        (&a * &c.pow(3)).mul_coeff((-4).into()),
        (&b.pow(3) * &d).mul_coeff((-4).into()),
        (&a.pow(2) * &d.pow(2)).mul_coeff((-27).into()),
        (&(&a * &b) * &(&c * &d)).mul_coeff(18.into()),
    ];
    let expected = terms.iter().fold(ring.zero(), |acc, t| &acc + t);

    for s in STRATEGIES {
        assert_eq!(f.to_univariate(x_var).discriminant(s), expected);
    }
}

#[test]
fn univariate_tower() {
    init_logging();

    let (x, y) = (Variable::new(1), Variable::new(0));
    let ring = UnivariatePolynomialRing::new(Z, y);
    let coeff = |c: &[i64]| int_poly(y, c);

    // x^2 + y*x + 1
    let f = UnivariatePolynomial::from_coefficients(
        ring.clone(),
        x,
        vec![coeff(&[1]), coeff(&[0, 1]), coeff(&[1])],
    );
    for s in STRATEGIES {
        assert_eq!(f.discriminant(s), coeff(&[-4, 0, 1]));
    }

    // x - y and x^2 - 2: the resultant vanishes at y = +-sqrt(2)
    let g = UnivariatePolynomial::from_coefficients(ring.clone(), x, vec![coeff(&[0, -1]), coeff(&[1])]);
    let h = UnivariatePolynomial::from_coefficients(ring, x, vec![coeff(&[-2]), coeff(&[]), coeff(&[1])]);
    for s in STRATEGIES {
        assert_eq!(h.resultant(&g, s), coeff(&[-2, 0, 1]));
    }
    assert_eq!(h.resultant_prs(&g), coeff(&[-2, 0, 1]));

    // x^2 + (a*y + b)*x + c with sampled constants in Z[y]
    let mut rng = StdRng::seed_from_u64(8);
    let ring = UnivariatePolynomialRing::new(Z, y);
    for _ in 0..20 {
        let [a, b, c] = [(); 3].map(|_| ring.sample(&mut rng, (-3, 4)));
        let linear = &(&a * &coeff(&[0, 1])) + &b;
        let f = UnivariatePolynomial::from_coefficients(
            ring.clone(),
            x,
            vec![c.clone(), linear.clone(), ring.one()],
        );
        let expected = &(&linear * &linear) - &c.mul_coeff(&Integer::new(4));
        for s in STRATEGIES {
            assert_eq!(f.discriminant(s), expected);
        }
    }
}

#[test]
fn sylvester_properties() {
    init_logging();

    let x = Variable::new(0);
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..40 {
        let f = random_poly(&mut rng, x, 3);
        let g = random_poly(&mut rng, x, 3);
        let h = random_poly(&mut rng, x, 4);

        // multiplicativity
        let fg = &f * &g;
        assert_eq!(
            fg.resultant_prs(&h),
            Z.mul(&f.resultant_prs(&h), &g.resultant_prs(&h))
        );

        // swapping the arguments introduces a sign (-1)^(deg f deg h)
        let r = f.resultant_prs(&h);
        let swapped = h.resultant_prs(&f);
        if f.degree() * h.degree() % 2 == 1 {
            assert_eq!(swapped, -&r);
        } else {
            assert_eq!(swapped, r);
        }

        // a common factor makes the resultant vanish
        let gh = &g * &h;
        for s in STRATEGIES {
            assert!(fg.resultant(&gh, s).is_zero());
        }

        // the discriminant of a product
        let disc_fg = fg.discriminant(SubresultantStrategy::Lazard);
        if g.degree() > 0 && f.degree() > 0 {
            let df = f.discriminant(SubresultantStrategy::Lazard);
            let dg = g.discriminant(SubresultantStrategy::Lazard);
            let rfg = f.resultant_prs(&g);
            assert_eq!(disc_fg, Z.mul(&Z.mul(&df, &dg), &Z.mul(&rfg, &rfg)));
        }
    }
}

#[test]
fn field_and_ring_resultants_agree() {
    init_logging();

    let x = Variable::new(0);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..40 {
        let f = random_poly(&mut rng, x, 5);
        let g = random_poly(&mut rng, x, 5);

        let to_q = |p: &UnivariatePolynomial<IntegerRing>| {
            UnivariatePolynomial::from_coefficients(
                Q,
                x,
                p.coefficients.iter().map(Rational::from).collect(),
            )
        };

        let expected = Rational::from(&f.resultant_prs(&g));
        assert_eq!(to_q(&f).resultant_field(&to_q(&g)), expected);

        let fq = to_q(&f);
        for s in STRATEGIES {
            assert_eq!(
                fq.discriminant(s),
                Rational::from(&f.discriminant(s)),
            );
        }
    }
}
