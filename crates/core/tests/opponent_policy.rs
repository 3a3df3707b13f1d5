use kobo_core::{Actor, Card, Decision, Hand, OpponentActor, Rank, RngState, Suit, TurnView};

fn hand_of(layout: &[(Rank, bool)]) -> Hand {
    let mut hand = Hand::from_cards(
        layout
            .iter()
            .zip(Suit::ALL.iter().cycle())
            .map(|(&(rank, _), &suit)| Card::new(rank, suit))
            .collect(),
    );
    for (index, &(_, discovered)) in layout.iter().enumerate() {
        if discovered {
            hand.discover(index).unwrap();
        }
    }
    hand
}

fn decide(own: &[(Rank, bool)], drawn: Rank, rival_kobo: bool) -> Decision {
    let own = hand_of(own);
    let rival = hand_of(&[(Rank::Three, false); 4]);
    let view = TurnView {
        drawn: Card::new(drawn, Suit::Spades),
        own: &own,
        rival: &rival,
        rival_kobo,
    };
    OpponentActor::new().decide(&view).unwrap()
}

macro_rules! ladder_case {
    ($name:ident, $own:expr, $drawn:expr, $kobo:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(decide(&$own, $drawn, $kobo), $expected);
        }
    };
}

ladder_case!(
    forced_jack_declines_the_drawn_jack,
    [(Rank::Five, true), (Rank::Six, false)],
    Rank::Jack,
    true,
    Decision::decline()
);
ladder_case!(
    forced_jack_substitutes_a_known_jack,
    [(Rank::Five, true), (Rank::Jack, true), (Rank::Seven, false)],
    Rank::Three,
    true,
    Decision::substitute(1)
);
ladder_case!(
    forced_jack_ignores_a_hidden_jack,
    [(Rank::Jack, false), (Rank::Five, true)],
    Rank::Three,
    true,
    Decision::substitute(0)
);
ladder_case!(
    without_a_standing_kobo_a_jack_is_just_a_card,
    [(Rank::Five, true), (Rank::Six, false)],
    Rank::Jack,
    false,
    Decision::substitute(1)
);
ladder_case!(
    a_drawn_queen_is_always_declined,
    [(Rank::Five, true), (Rank::Six, true)],
    Rank::Queen,
    false,
    Decision::decline()
);
ladder_case!(
    a_drawn_queen_is_declined_before_learning_hidden_cards,
    [(Rank::Five, true), (Rank::Six, false)],
    Rank::Queen,
    false,
    Decision::decline()
);
ladder_case!(
    a_known_queen_goes_while_hidden_cards_remain,
    [(Rank::Three, false), (Rank::Queen, true), (Rank::Five, false)],
    Rank::Seven,
    false,
    Decision::substitute(1)
);
ladder_case!(
    a_known_queen_stays_once_everything_is_discovered,
    [(Rank::Queen, true), (Rank::King, true)],
    Rank::Seven,
    false,
    Decision::substitute(1)
);
ladder_case!(
    the_first_hidden_card_is_learned,
    [(Rank::Five, true), (Rank::Seven, false), (Rank::Nine, false)],
    Rank::Three,
    false,
    Decision::substitute(1)
);
ladder_case!(
    a_hidden_card_outranks_a_tempting_kobo,
    [(Rank::King, true), (Rank::Seven, false)],
    Rank::Ace,
    false,
    Decision::substitute(1)
);
ladder_case!(
    kobo_fires_when_the_best_hit_is_great,
    [(Rank::Five, true), (Rank::Ten, true)],
    Rank::Three,
    false,
    Decision::substitute(1).with_kobo()
);
ladder_case!(
    kobo_declines_the_drawn_card_when_it_is_the_heaviest,
    [(Rank::Ace, true), (Rank::Two, true)],
    Rank::Ten,
    false,
    Decision::decline().with_kobo()
);
ladder_case!(
    kobo_weighs_a_pair_over_a_lone_great_card,
    [(Rank::Two, true), (Rank::Two, true)],
    Rank::Ace,
    false,
    Decision::substitute(0).with_kobo()
);
ladder_case!(
    no_kobo_while_the_best_hit_is_ordinary,
    [(Rank::Five, true), (Rank::King, true)],
    Rank::Three,
    false,
    Decision::substitute(1)
);
ladder_case!(
    a_drawn_duplicate_is_declined_for_the_free_echo,
    [(Rank::Seven, true), (Rank::King, true)],
    Rank::Seven,
    false,
    Decision::decline()
);
ladder_case!(
    a_great_duplicate_is_kept_in_play,
    [(Rank::Two, true), (Rank::King, true)],
    Rank::Two,
    false,
    Decision::substitute(1)
);
ladder_case!(
    the_heaviest_known_card_is_shed,
    [(Rank::Nine, true), (Rank::Four, true)],
    Rank::Six,
    false,
    Decision::substitute(0)
);
ladder_case!(
    decline_when_the_drawn_card_is_the_heaviest,
    [(Rank::Four, true), (Rank::Five, true)],
    Rank::Nine,
    false,
    Decision::decline()
);

#[test]
fn swaps_are_declined_while_no_kobo_stands() {
    let own = hand_of(&[(Rank::Five, true), (Rank::Six, false)]);
    let rival = hand_of(&[(Rank::Three, false); 4]);
    let mut rng = RngState::from_seed(3);
    let choice = OpponentActor::new()
        .choose_swap(&own, &rival, false, &mut rng)
        .unwrap();
    assert_eq!(choice, None);
}

#[test]
fn a_forced_swap_gives_away_the_heaviest_combination() {
    // the hidden six joins the discovered one; together they outweigh the king
    let own = hand_of(&[(Rank::Six, true), (Rank::King, true), (Rank::Six, false)]);
    let rival = hand_of(&[(Rank::Three, false); 4]);
    let mut rng = RngState::from_seed(3);
    let choice = OpponentActor::new()
        .choose_swap(&own, &rival, true, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(choice.own, 1);
    assert!(choice.rival < rival.len());

    let own = hand_of(&[(Rank::Six, true), (Rank::Six, false), (Rank::Ten, true)]);
    let choice = OpponentActor::new()
        .choose_swap(&own, &rival, true, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(choice.own, 0);
}

#[test]
fn forced_swaps_count_hidden_cards_too() {
    let own = hand_of(&[(Rank::Five, true), (Rank::King, false)]);
    let rival = hand_of(&[(Rank::Three, false); 2]);
    let mut rng = RngState::from_seed(9);
    let choice = OpponentActor::new()
        .choose_swap(&own, &rival, true, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(choice.own, 1);
}

#[test]
fn reveals_target_the_first_hidden_card() {
    let mut actor = OpponentActor::new();
    let own = hand_of(&[(Rank::Five, true), (Rank::Seven, false)]);
    assert_eq!(actor.choose_reveal(&own).unwrap(), Some(1));
    let own = hand_of(&[(Rank::Five, true), (Rank::Seven, true)]);
    assert_eq!(actor.choose_reveal(&own).unwrap(), None);
}
