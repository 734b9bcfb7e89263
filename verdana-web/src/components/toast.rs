use crate::i18n::t;
use verdana_core::toast::{DEFAULT_TOAST_DURATION_MS, ToastKind, ToastPhase, ToastSignal};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
    #[prop_or_default]
    pub kind: ToastKind,
    /// Auto-dismiss delay; `0` keeps the toast up until explicitly closed.
    #[prop_or(DEFAULT_TOAST_DURATION_MS)]
    pub duration_ms: u32,
    /// Initial visibility. Mirrored into the state machine at mount only.
    #[prop_or(true)]
    pub show: bool,
    /// Invoked once the exit grace window has passed and the host may
    /// discard the toast. `None` also removes the close affordance.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

/// Transient notification. The lifecycle is the core state machine; this
/// component only feeds it timer and click signals. The single effect
/// below re-derives the pending delay whenever the phase or any timing
/// parameter changes, and its cleanup cancels whatever was scheduled
/// before, so one timer is live per toast at most.
#[function_component(Toast)]
pub fn toast(p: &Props) -> Html {
    let phase = {
        let show = p.show;
        use_state(move || ToastPhase::initial(show))
    };

    {
        let phase_handle = phase.clone();
        use_effect_with(
            (*phase, p.show, p.duration_ms, p.on_close.clone()),
            move |(phase, show, duration_ms, on_close)| {
                let pending = if *phase == ToastPhase::Visible && !*show {
                    // A host that hides the toast mid-flight also parks the
                    // countdown; timers always reflect the newest props.
                    None
                } else {
                    phase.pending(*duration_ms)
                };
                let timer = pending.and_then(|(delay_ms, signal)| {
                    let current = *phase;
                    let on_close = on_close.clone();
                    crate::dom::Timer::schedule(delay_ms, move || {
                        if signal == ToastSignal::GraceElapsed {
                            if let Some(cb) = on_close.as_ref() {
                                cb.emit(());
                            }
                        }
                        phase_handle.set(current.step(signal));
                    })
                });
                move || drop(timer)
            },
        );
    }

    if !phase.is_rendered() {
        return html! {};
    }

    let dismiss = p.on_close.as_ref().map(|_| {
        let phase = phase.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            phase.set(phase.step(ToastSignal::Dismissed));
        });
        html! {
            <button
                type="button"
                class="toast__close"
                aria-label={t("toast.dismiss")}
                onclick={onclick}
            >
                {"✕"}
            </button>
        }
    });

    html! {
        <div
            class={classes!("toast", p.kind.css_class())}
            role="status"
            aria-live="polite"
        >
            <span class="toast__icon" aria-hidden="true">{ p.kind.icon() }</span>
            <span class="sr-only">{ t(p.kind.label_key()) }</span>
            <span class="toast__message">{ p.message.clone() }</span>
            { dismiss.unwrap_or_default() }
        </div>
    }
}
