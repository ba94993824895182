use polyres::{
    domains::{integer::Z, Ring, RingPrinter},
    poly::{polynomial::PolynomialRing, resultant::SubresultantStrategy},
    printer::PrintOptions,
    state::State,
};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

fn cubic_discriminant() {
    let ring: PolynomialRing<_> = PolynomialRing::new(Z);
    let x_var = State::get_variable("x");
    let [x, p, q] = ["x", "p", "q"].map(|n| ring.variable(State::get_variable(n)));

    // the depressed cubic x^3 + p*x + q
    let cubic = &(&x.pow(3) + &(&p * &x)) + &q;
    let cubic_x = cubic.to_univariate(x_var);

    for strategy in [
        SubresultantStrategy::Generic,
        SubresultantStrategy::Lazard,
        SubresultantStrategy::Ducos,
    ] {
        println!(
            "> Discriminant of {} with {:?} =",
            cubic, strategy
        );
        println!("\t{}", cubic_x.discriminant(strategy));
    }

    println!("> Subresultant chain of {} and its derivative =", cubic);
    for s in cubic_x.subresultants(&cubic_x.derivative(), SubresultantStrategy::default()) {
        println!("\t{}", s);
    }
}

fn circle_line_resultant() {
    let ring: PolynomialRing<_> = PolynomialRing::new(Z);
    let x_var = State::get_variable("x");
    let [x, y, a] = ["x", "y", "a"].map(|n| ring.variable(State::get_variable(n)));

    let circle = &(&x.pow(2) + &y.pow(2)) - &ring.one();
    let line = &x - &a;
    let r = circle
        .to_univariate(x_var)
        .resultant(&line.to_univariate(x_var), SubresultantStrategy::default());

    println!("> Resultant in x of {} and {} =", circle, line);
    println!("\t{}", r);

    let printer = RingPrinter {
        opts: PrintOptions::prefix(),
        ..ring.printer(&r)
    };
    println!("\t{}", printer);
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("POLYRES_LOG"))
        .init();

    cubic_discriminant();
    circle_line_resultant();
}
