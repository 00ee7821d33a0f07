//! The burglar night.
//!
//! The family hides its treasure in the wall compartment and leaves for the
//! evening. While the minimap is enabled the player picks the family's room,
//! which decides how the burglar gets in. Sliding the bookshelf over the
//! compartment and letting the burglar's wind put the fire out saves the
//! treasure; moving the bookshelf while the mother watches makes the family
//! believe in ghosts and flee.
//!
//! Timeline (scenario seconds):
//!
//! ```text
//!  1.0   introduction: the father shows the chest, the mother smiles
//!  8.6   the chest goes into the compartment
//!  9.2   the bookshelf can be moved
//! 12.2   ghosts? -> the family flees, game over
//! 18.7   the family has left, the minimap is enabled
//! 20.7   night falls, then the fire is lit
//! 26.7   the minimap and bookshelf are locked, the burglar comes in
//! 45.7   the burglar finds the compartment, or does not
//! ```

use log::info;

use crate::components::animation::Animation;
use crate::components::character::Direction::{Down, Left, Right, Up};
use crate::components::sky::{NIGHT_COLOR, SKY_TRANSITION};
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::resources::scenario::ScenarioState;
use crate::resources::screen::{NextScreen, Screen};
use crate::resources::soundcues::SoundCues;
use crate::scheduler::Scheduler;
use crate::scheduler::actions::{is_active, set_sprite_set};
use crate::systems::minimap::set_minimap_enabled;

use super::house::{self, House, SOUND_WINDOW};

pub const SOUND_BUBBLE: &str = "bubble";
pub const SOUND_WIND: &str = "wind";
/// Seconds a speech bubble stays up.
const SAY: f32 = 1.0;

/// Spawn the house and schedule the whole night.
pub fn build(world: &mut World, scheduler: &mut Scheduler) -> Result<House, ScenarioError> {
    world.insert_resource(ScenarioState::default());
    if !world.contains_resource::<SoundCues>() {
        world.insert_resource(SoundCues::default());
    }
    let house = house::build(world)?;
    script(scheduler, &house);
    info!("scenario started");
    Ok(house)
}

fn state(world: &World) -> &ScenarioState {
    world.resource::<ScenarioState>()
}

fn goto(screen: Screen) -> impl FnOnce(&mut World) + 'static {
    move |world: &mut World| {
        info!("scenario over: {screen:?}");
        world.resource_mut::<NextScreen>().set(screen);
    }
}

/// Register every step of the night on `scheduler`.
pub fn script(scheduler: &mut Scheduler, house: &House) {
    let House {
        father,
        mother,
        burglar,
        bubble,
        sky,
        fireplace,
        compartment,
        bookshelf,
        openings,
    } = *house;

    let introduction_begin = scheduler
        .at(1.0)
        .bubble(father, bubble, "bubble_chest.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(2.0)
        .bubble(mother, bubble, "bubble_smile.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(2.0)
        .bubble(father, bubble, "bubble_idea.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.5)
        .walk(father, Up, 3.5, 2.0)
        .after(0.7)
        .look(mother, Up)
        .after(1.4)
        .set_image(compartment, "compartment_open_chest.png")
        .try_call(move |w| set_sprite_set(w, father, "boy"))
        .after(0.3)
        .sound(SOUND_WINDOW)
        .set_image(compartment, "compartment.png")
        .after(0.3)
        .walk(father, Down, 2.0, 1.0)
        .call(|w| w.resource_mut::<ScenarioState>().bookshelf_can_move = true)
        .after(1.0)
        .walk(father, Right, 8.0, 4.5)
        .after(1.0)
        .look(mother, Right)
        .after(1.0)
        .id();

    // The family saw the bookshelf move by itself and runs away.
    scheduler
        .step(introduction_begin)
        .when(|w| state(w).ghosts)
        .bubble(mother, bubble, "bubble_ghost.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .look(mother, Down)
        .after(0.3)
        .look(mother, Up)
        .after(0.3)
        .look(mother, Left)
        .after(0.3)
        .look(mother, Right)
        .after(1.0)
        .bubble(father, bubble, "bubble_ghost.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .look(father, Down)
        .after(0.3)
        .look(father, Right)
        .after(0.3)
        .look(father, Left)
        .after(0.3)
        .look(father, Up)
        .after(1.0)
        .walk(mother, Right, 6.0, 1.0)
        .after(0.5)
        .walk(father, Up, 1.5, 0.3)
        .after(0.5)
        .walk(father, Left, 2.0, 0.4)
        .after(0.5)
        .walk(mother, Up, 3.0, 0.5)
        .after(0.2)
        .walk(father, Down, 3.5, 0.8)
        .after(0.5)
        .walk(mother, Left, 2.0, 0.4)
        .after(0.3)
        .walk(father, Right, 3.0, 0.7)
        .after(0.7)
        .toggle(father)
        .walk(mother, Right, 2.0, 0.3)
        .after(0.3)
        .walk(mother, Down, 6.0, 1.0)
        .after(1.0)
        .walk(mother, Right, 2.5, 0.5)
        .after(0.5)
        .walk(mother, Up, 1.6, 0.3)
        .after(0.3)
        .look(mother, Right)
        .after(0.3)
        .toggle(mother)
        .after(2.0)
        .call(goto(Screen::GameOver));

    let introduction_end = scheduler
        .step(introduction_begin)
        .when(|w| !state(w).ghosts)
        .after(1.0)
        .walk(mother, Right, 6.0, 3.5)
        .after(2.5)
        .walk(father, Down, 2.0, 1.0)
        .after(1.0)
        .walk(father, Right, 1.5, 1.0)
        .walk(mother, Down, 1.0, 0.5)
        .after(0.5)
        .walk(mother, Right, 2.5, 1.5)
        .after(0.5)
        .toggle(father)
        .after(1.0)
        .toggle(mother)
        .try_call(|w| set_minimap_enabled(w, true))
        .after(2.0)
        .animate(sky, Animation::color_transition(NIGHT_COLOR, SKY_TRANSITION))
        .after(1.0)
        .toggle_light(fireplace, true)
        .after(5.0)
        .try_call(|w| set_minimap_enabled(w, false))
        .call(|w| w.resource_mut::<ScenarioState>().bookshelf_can_move = false)
        .id();

    // The burglar comes in through whatever the family's room offers.
    let up_door = openings.up_door;
    let down_door = openings.down_door;
    let window = openings.up_window;

    scheduler
        .step(introduction_end)
        .after(0.6)
        .when(move |w| is_active(w, up_door))
        .place(burglar, 6.0, 1.0)
        .look(burglar, Down)
        .toggle(burglar)
        .after(0.5)
        .walk(burglar, Down, 3.0, 1.5);

    scheduler
        .step(introduction_end)
        .when(move |w| is_active(w, window))
        .set_image(window, "window_semiopen.png")
        .sound(SOUND_WINDOW)
        .after(0.1)
        .sound(SOUND_WIND)
        .after(0.4)
        .set_image(window, "window_open.png")
        .after(0.5)
        .place(burglar, 6.0, 1.0)
        .look(burglar, Down)
        .toggle(burglar)
        .after(0.5)
        .walk(burglar, Down, 3.0, 1.5)
        .after(0.5)
        .toggle_light(fireplace, false)
        .set_image(fireplace, "fireplace_down.png")
        .call(|w| w.resource_mut::<ScenarioState>().fireplace_unlit = true)
        .after(1.0)
        .bubble(burglar, bubble, "bubble_blind.png", SAY)
        .sound(SOUND_BUBBLE);

    scheduler
        .step(introduction_end)
        .after(0.8)
        .when(move |w| is_active(w, down_door) && !is_active(w, window))
        .place(burglar, 6.0, 7.0)
        .look(burglar, Up)
        .toggle(burglar)
        .after(0.5)
        .walk(burglar, Up, 3.0, 1.5);

    // Searching around the room.
    let find = scheduler
        .step(introduction_end)
        .after(1.0)
        .toggle_light(burglar, true)
        .after(3.0)
        .walk(burglar, Right, 3.0, 1.5)
        .after(1.5)
        .walk(burglar, Up, 2.0, 1.0)
        .after(1.5)
        .walk(burglar, Left, 4.0, 2.0)
        .after(2.0)
        .walk(burglar, Down, 5.0, 2.5)
        .after(2.5)
        .walk(burglar, Left, 5.0, 2.5)
        .after(2.5)
        .walk(burglar, Up, 2.0, 1.0)
        .after(1.0)
        .look(burglar, Right)
        .after(0.5)
        .walk(burglar, Up, 3.0, 1.5)
        .after(1.5)
        .walk(burglar, Right, 3.0, 1.5)
        .after(2.0)
        .id();

    // Either the compartment is in plain sight or the fire shows the bookshelf was moved.
    let steal = scheduler
        .step(find)
        .when(|w| {
            let s = state(w);
            !s.bookshelf_moved || !s.fireplace_unlit
        })
        .bubble(burglar, bubble, "bubble_question.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .walk(burglar, Left, 3.0, 0.7)
        .after(0.7)
        .look(burglar, Up)
        .after(0.1)
        .bubble(burglar, bubble, "bubble_exclamation.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.2)
        .id();

    scheduler
        .step(steal)
        .when(|w| !state(w).bookshelf_moved)
        .sound(SOUND_WINDOW)
        .set_image(compartment, "compartment_open_chest.png")
        .after(0.5)
        .bubble(burglar, bubble, "bubble_smile_money.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .call(goto(Screen::GameOver));

    scheduler
        .step(steal)
        .when(|w| {
            let s = state(w);
            s.bookshelf_moved && !s.fireplace_unlit
        })
        .bubble(burglar, bubble, "bubble_question.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .try_call(move |w| house::move_bookshelf(w, bookshelf))
        .after(1.5)
        .look(burglar, Up)
        .after(0.1)
        .bubble(burglar, bubble, "bubble_exclamation.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .sound(SOUND_WINDOW)
        .set_image(compartment, "compartment_open_chest.png")
        .after(0.5)
        .bubble(burglar, bubble, "bubble_smile_money.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .call(goto(Screen::GameOver));

    // In the dark the burglar never notices the bookshelf.
    scheduler
        .step(find)
        .when(|w| {
            let s = state(w);
            s.bookshelf_moved && s.fireplace_unlit
        })
        .walk(burglar, Right, 3.0, 1.5)
        .after(1.5)
        .look(burglar, Up)
        .after(0.1)
        .bubble(burglar, bubble, "bubble_cry.png", SAY)
        .sound(SOUND_BUBBLE)
        .after(1.0)
        .walk(burglar, Up, 1.0, 0.5)
        .after(0.5)
        .toggle(burglar)
        .after(0.5)
        .call(goto(Screen::HappyEnd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::activable::Activable;
    use crate::components::renderable::Renderable;
    use crate::resources::screen::NextScreens;
    use crate::systems::animation::update_animations;

    fn setup() -> (World, Scheduler, House) {
        let mut world = World::new();
        world.insert_resource(NextScreen::new());
        let mut scheduler = Scheduler::new();
        let house = build(&mut world, &mut scheduler).unwrap();
        (world, scheduler, house)
    }

    fn run(world: &mut World, scheduler: &mut Scheduler, seconds: f32) {
        let dt = 0.05;
        for _ in 0..(seconds / dt).round() as usize {
            scheduler.update(world, dt).unwrap();
            update_animations(world, dt).unwrap();
        }
    }

    #[test]
    fn test_build_leaves_burglar_offstage() {
        let (world, _, house) = setup();
        assert!(!world.get_component::<Activable>(house.burglar).unwrap().active);
        assert!(!world.get_component::<Activable>(house.bubble).unwrap().active);
        assert_eq!(*state(&world), ScenarioState::default());
    }

    #[test]
    fn test_introduction_hides_chest() {
        let (mut world, mut scheduler, house) = setup();
        run(&mut world, &mut scheduler, 9.0);
        assert_eq!(
            world
                .get_component::<Renderable>(house.compartment)
                .unwrap()
                .current_image(),
            Some("compartment.png")
        );
        assert_eq!(
            world.get_component::<Renderable>(house.father).unwrap().current_image(),
            Some("boy_b_idle.png")
        );
        assert!(!state(&world).bookshelf_can_move);

        run(&mut world, &mut scheduler, 0.5);
        assert!(state(&world).bookshelf_can_move);
        assert_eq!(world.resource::<NextScreen>().get(), NextScreens::Unchanged);
        assert!(world.resource::<SoundCues>().pending().contains(&SOUND_BUBBLE));
    }
}
