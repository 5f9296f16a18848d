//! Scoring, policy and resolver tests.

use std::collections::HashSet;

use bjrules::policy::{StandAt, dealer_draws_on, draw_prompt, from_fn};
use bjrules::{
    AceResolution, Card, DECK_SIZE, Deck, DrawError, GameOptions, Outcome, Participant,
    PlayerStrategy, PolicyError, Rank, Role, Score, ScoreError, Suit, Winner, build_deck,
    dealer_should_draw, resolve, score,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const fn hard(total: u8) -> Score {
    Score {
        total,
        is_soft: false,
    }
}

const fn soft(total: u8) -> Score {
    Score {
        total,
        is_soft: true,
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn catalog_has_every_rank_and_suit_once() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<(Suit, Rank)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let aces: Vec<&Card> = deck.iter().filter(|c| c.is_ace()).collect();
    assert_eq!(aces.len(), 4);
    assert!(aces.iter().all(|c| c.value() == 11));

    for face in [Rank::Jack, Rank::Queen, Rank::King] {
        assert!(deck.iter().filter(|c| c.rank == face).all(|c| c.value() == 10));
    }
    assert_eq!(build_deck(), deck);
}

#[test]
fn rank_index_follows_catalog_numbering() {
    assert_eq!(Rank::from_index(2), Some(Rank::Two));
    assert_eq!(Rank::from_index(10), Some(Rank::Ten));
    assert_eq!(Rank::from_index(11), Some(Rank::Ace));
    assert_eq!(Rank::from_index(12), Some(Rank::Jack));
    assert_eq!(Rank::from_index(13), Some(Rank::Queen));
    assert_eq!(Rank::from_index(14), Some(Rank::King));
    assert_eq!(Rank::from_index(1), None);
    assert_eq!(Rank::from_index(15), None);
    assert!(Rank::ALL.iter().all(|r| Rank::from_index(r.index()) == Some(*r)));
    assert_eq!(Rank::Queen.label(), "Queen");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of spades");
}

#[test]
fn hands_without_aces_sum_and_are_hard() {
    let hand = [
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Spades, Rank::Three),
    ];
    let scored = score(&hand, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(scored.score, hard(20));
    assert_eq!(scored.cards, hand);
}

#[test]
fn single_ace_counts_eleven_until_it_busts() {
    let blackjack = [card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Ten)];
    let scored = score(&blackjack, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(scored.score, soft(21));

    let lone = [card(Suit::Spades, Rank::Ace)];
    let scored = score(&lone, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(scored.score, soft(11));

    let demoted = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
    ];
    let scored = score(&demoted, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(scored.score, hard(15));
    assert_eq!(scored.cards[0].value(), 1);
    // The caller's cards are left alone.
    assert_eq!(demoted[0].value(), 11);
}

#[test]
fn empty_hand_is_rejected() {
    assert_eq!(
        score(&[], AceResolution::FirstAceOnly, &mut rng()).unwrap_err(),
        ScoreError::InvalidHandShape
    );
    assert_eq!(
        Score::of_resolved(&[]).unwrap_err(),
        ScoreError::InvalidHandShape
    );
}

#[test]
fn two_ace_opening_hand_is_a_fair_coin() {
    let hand = [card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Ace)];
    let mut rng = rng();
    let trials = 10_000;
    let mut soft_twelves = 0;

    for _ in 0..trials {
        let scored = score(&hand, AceResolution::FirstAceOnly, &mut rng).unwrap();
        assert_eq!(scored.cards[0].value(), 1);
        match scored.score {
            s if s == hard(2) => {}
            s if s == soft(12) => soft_twelves += 1,
            other => panic!("unexpected two-ace score {other:?}"),
        }
    }

    assert!((4_500..=5_500).contains(&soft_twelves), "{soft_twelves}");
}

#[test]
fn resolved_hands_are_not_resolved_again() {
    let mut rng = rng();
    let hand = [card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Ace)];
    let first = score(&hand, AceResolution::FirstAceOnly, &mut rng).unwrap();

    for _ in 0..50 {
        let again = score(&first.cards, AceResolution::FirstAceOnly, &mut rng).unwrap();
        assert_eq!(again, first);
    }
    assert_eq!(Score::of_resolved(&first.cards).unwrap(), first.score);
}

#[test]
fn first_ace_only_leaves_later_aces_alone() {
    let hand = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
    ];
    let scored = score(&hand, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(scored.score, soft(21));

    let three_aces = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
    ];
    let scored = score(&three_aces, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(scored.score, hard(32));
    assert!(scored.score.is_bust());

    let scored = score(&three_aces, AceResolution::AllAces, &mut rng()).unwrap();
    assert_eq!(scored.score, hard(12));
}

#[test]
fn all_aces_demotes_only_as_far_as_needed() {
    let hand = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Five),
    ];
    let scored = score(&hand, AceResolution::AllAces, &mut rng()).unwrap();
    assert_eq!(scored.score, soft(17));
    assert_eq!(scored.cards[0].value(), 1);
    assert_eq!(scored.cards[1].value(), 11);
}

#[test]
fn demoted_ace_stays_demoted_across_draws() {
    let opening = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
    ];
    let mut resolved = score(&opening, AceResolution::FirstAceOnly, &mut rng())
        .unwrap()
        .cards;
    resolved.push(card(Suit::Diamonds, Rank::Ace));

    let legacy = score(&resolved, AceResolution::FirstAceOnly, &mut rng()).unwrap();
    assert_eq!(legacy.score, hard(26));

    let corrected = score(&resolved, AceResolution::AllAces, &mut rng()).unwrap();
    assert_eq!(corrected.score, hard(16));
}

#[test]
fn dealer_policy_thresholds() {
    assert!(dealer_draws_on(hard(12), false));
    assert!(dealer_draws_on(hard(16), false));
    assert!(dealer_draws_on(soft(17), false));
    assert!(!dealer_draws_on(hard(17), false));
    assert!(!dealer_draws_on(soft(17), true));
    for total in 18..=21 {
        assert!(!dealer_draws_on(hard(total), false));
        assert!(!dealer_draws_on(soft(total), false));
    }
    assert!(!dealer_draws_on(hard(24), false));
}

#[test]
fn dealer_should_draw_scores_the_hand() {
    let options = GameOptions::default();
    let mut rng = rng();

    let sixteen = [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Six)];
    assert!(dealer_should_draw(&sixteen, &options, &mut rng).unwrap());

    let soft_17 = [card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Six)];
    assert!(dealer_should_draw(&soft_17, &options, &mut rng).unwrap());
    let lenient = options.clone().with_stand_on_soft_17(true);
    assert!(!dealer_should_draw(&soft_17, &lenient, &mut rng).unwrap());

    let hard_17 = [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Seven)];
    assert!(!dealer_should_draw(&hard_17, &options, &mut rng).unwrap());

    assert_eq!(
        dealer_should_draw(&[], &options, &mut rng).unwrap_err(),
        PolicyError::InvalidPolicyInput
    );
}

#[test]
fn player_strategies() {
    let up = card(Suit::Clubs, Rank::Ace);

    let mut stand_at = StandAt(17);
    assert!(stand_at.should_draw(hard(16), up));
    assert!(!stand_at.should_draw(hard(17), up));

    let mut asked = 0;
    let mut never = from_fn(|_score: Score, _up: Card| {
        asked += 1;
        false
    });
    assert!(!never.should_draw(hard(5), up));
    assert_eq!(asked, 1);

    assert_eq!(
        draw_prompt(soft(12), up),
        "Dealer showing Ace, your count is 12.  Draw card?"
    );
}

#[test]
fn resolver_compares_totals() {
    let r = resolve(20, 19);
    assert_eq!(r.outcome, Outcome::PlayerWins);
    assert_eq!(r.outcome.winner(), Winner::Player);
    assert_eq!((r.player_total, r.dealer_total), (20, 19));

    assert_eq!(resolve(20, 20).outcome, Outcome::Tie);
    assert_eq!(resolve(21, 21).outcome, Outcome::Tie);
    assert_eq!(resolve(17, 19).outcome, Outcome::DealerWins);

    let bust = resolve(22, 19);
    assert_eq!(bust.outcome, Outcome::PlayerBust);
    assert_eq!(bust.outcome.winner(), Winner::Dealer);

    assert_eq!(resolve(18, 23).outcome, Outcome::DealerBust);
    assert_eq!(resolve(23, 25).outcome, Outcome::PlayerBust);
}

#[test]
fn resolution_reports_both_scores() {
    assert_eq!(
        resolve(20, 19).to_string(),
        "player score: 20, dealer score: 19, winner: player"
    );
    assert_eq!(
        resolve(18, 18).to_string(),
        "player score: 18, dealer score: 18, winner: tie"
    );
    assert_eq!(resolve(25, 18).to_string(), "You went over 21 - you lose!");
}

#[test]
fn decks_draw_by_mode() {
    let mut rng = rng();

    let mut replacing = Deck::with_replacement();
    for _ in 0..200 {
        replacing.draw(&mut rng).unwrap();
    }
    assert_eq!(replacing.len(), DECK_SIZE);

    let mut shuffled = Deck::shuffled(&mut rng);
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let c = shuffled.draw(&mut rng).unwrap();
        assert!(seen.insert((c.suit, c.rank)));
    }
    assert!(shuffled.is_empty());
    assert_eq!(shuffled.draw(&mut rng).unwrap_err(), DrawError::EmptyDeck);

    let order = [card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::King)];
    let mut stacked = Deck::stacked(&order);
    assert_eq!(stacked.draw(&mut rng).unwrap(), order[0]);
    assert_eq!(stacked.draw(&mut rng).unwrap(), order[1]);
    assert_eq!(stacked.draw(&mut rng).unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn participant_draws_and_rescores() {
    let mut rng = rng();
    let mut deck = Deck::stacked(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
    ]);
    let mut player = Participant::new(Role::Player);
    assert_eq!(player.name(), "player");
    assert!(player.current_score().is_err());

    player.draw(&mut deck, &mut rng).unwrap();
    player.draw(&mut deck, &mut rng).unwrap();
    let opening = player.rescore(AceResolution::FirstAceOnly, &mut rng).unwrap();
    assert_eq!(opening, soft(16));
    assert_eq!(player.to_string(), "player's hand is Ace, 5 (16)");

    let drawn = player.draw(&mut deck, &mut rng).unwrap();
    assert_eq!(drawn.rank, Rank::Nine);
    let after = player.rescore(AceResolution::FirstAceOnly, &mut rng).unwrap();
    assert_eq!(after, hard(15));
    assert_eq!(player.current_score().unwrap(), hard(15));
    assert_eq!(player.hand()[0].value(), 1);

    player.clear();
    assert!(player.hand().is_empty());
}
