use crate::ports::outbound::InstallState;
use crate::reverse_deps::domain::{
    DependentsResult, Formula, FormulaName, FormulaUniverse, KindFilter, QuerySpec, Resolution,
    UnresolvedTarget,
};
use crate::shared::Partial;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Inverted edge set: dependency name -> positions of the formulae declaring it
type ReverseEdges<'a> = HashMap<&'a str, Vec<usize>>;

/// ReverseResolver service computing "which formulae use these targets?"
///
/// Pure logic over an immutable universe; install state comes in through the
/// `InstallState` port and is only consulted for the final scope filters.
pub struct ReverseResolver;

impl ReverseResolver {
    /// Finds the dependents of `targets` under `spec`.
    ///
    /// Targets that do not resolve end up in the returned errors and never
    /// stop the query for the others. The targets themselves are never part
    /// of the result, even when they depend on each other or sit on a cycle.
    pub fn find_dependents<S, T>(
        universe: &FormulaUniverse,
        targets: &[T],
        spec: &QuerySpec,
        install_state: &S,
    ) -> Partial<DependentsResult, UnresolvedTarget>
    where
        S: InstallState + ?Sized,
        T: AsRef<str>,
    {
        let (resolved, mut unresolved) = Self::resolve_targets(universe, targets);
        let reverse = Self::reverse_edges(universe, &spec.kinds);

        let target_names: HashSet<&str> = targets.iter().map(AsRef::as_ref).collect();
        let is_target = |position: &usize| {
            target_names.contains(universe.all_formulae()[*position].name().as_str())
        };

        let mut seeds: Vec<&str> = resolved.iter().map(|f| f.name().as_str()).collect();
        if spec.match_missing {
            for target in &mut unresolved {
                target.dependent_count = reverse
                    .get(target.name.as_str())
                    .map_or(0, |positions| {
                        positions.iter().filter(|&&p| !is_target(&p)).count()
                    });
            }
            seeds.extend(unresolved.iter().map(|target| target.name.as_str()));
        }

        tracing::debug!(
            targets = targets.len(),
            seeds = seeds.len(),
            unresolved = unresolved.len(),
            kinds = %spec.kinds,
            recursive = spec.recursive,
            "finding dependents"
        );

        let reached = Self::walk(universe, &reverse, &seeds, spec.recursive);

        let dependents: BTreeSet<FormulaName> = reached
            .into_iter()
            .filter(|position| !is_target(position))
            .map(|position| &universe.all_formulae()[position])
            .filter(|formula| Self::in_scope(formula, spec, install_state))
            .map(|formula| formula.name().clone())
            .collect();

        tracing::debug!(dependents = dependents.len(), "query complete");

        Partial::new(DependentsResult::new(dependents), unresolved)
    }

    /// Resolves each distinct target name, keeping the misses aside.
    fn resolve_targets<'u, T: AsRef<str>>(
        universe: &'u FormulaUniverse,
        targets: &[T],
    ) -> (Vec<&'u Formula>, Vec<UnresolvedTarget>) {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();

        for target in targets.iter().map(AsRef::as_ref) {
            if !seen.insert(target) {
                continue;
            }
            match universe.resolve(target) {
                Resolution::Found(formula) => resolved.push(formula),
                Resolution::NotFound(name) => {
                    tracing::debug!(formula = %name, "target not in formula universe");
                    unresolved.push(UnresolvedTarget::new(name));
                }
            }
        }

        (resolved, unresolved)
    }

    /// Inverts every in-filter dependency and requirement edge.
    ///
    /// Edges to names outside the universe are kept under their name; they
    /// are only ever looked up when such a name is seeded on purpose.
    fn reverse_edges<'u>(universe: &'u FormulaUniverse, kinds: &KindFilter) -> ReverseEdges<'u> {
        let mut reverse: ReverseEdges<'u> = HashMap::new();

        for (position, formula) in universe.all_formulae().iter().enumerate() {
            for dependency in universe.dependencies_of(formula) {
                if !kinds.includes(dependency.kind()) {
                    continue;
                }
                let name = dependency.name().as_str();
                if !universe.contains(name) {
                    tracing::trace!(
                        formula = %formula.name(),
                        dependency = name,
                        "dangling dependency edge"
                    );
                }
                Self::add_edge(&mut reverse, name, position);
            }

            for requirement in universe.requirements_of(formula) {
                if kinds.includes(requirement.kind()) {
                    Self::add_edge(&mut reverse, requirement.name(), position);
                }
            }
        }

        reverse
    }

    fn add_edge<'u>(reverse: &mut ReverseEdges<'u>, name: &'u str, position: usize) {
        let dependents = reverse.entry(name).or_default();
        // A formula may declare the same name twice (dependency and requirement)
        if dependents.last() != Some(&position) {
            dependents.push(position);
        }
    }

    /// Breadth-first walk over the inverted edges starting from the seeds.
    ///
    /// Seeds are marked visited up front, so a target is never reported
    /// through another target or through a cycle back to itself.
    fn walk(
        universe: &FormulaUniverse,
        reverse: &ReverseEdges<'_>,
        seeds: &[&str],
        recursive: bool,
    ) -> BTreeSet<usize> {
        let formulae = universe.all_formulae();
        let mut visited: HashSet<&str> = seeds.iter().copied().collect();
        let mut reached = BTreeSet::new();
        let mut queue: VecDeque<&str> = seeds.iter().copied().collect();

        while let Some(name) = queue.pop_front() {
            let Some(dependents) = reverse.get(name) else {
                continue;
            };

            for &position in dependents {
                let dependent = formulae[position].name().as_str();
                if !visited.insert(dependent) {
                    continue;
                }
                tracing::trace!(dependency = name, dependent, "reached dependent");
                reached.insert(position);
                if recursive {
                    queue.push_back(dependent);
                }
            }
        }

        reached
    }

    fn in_scope<S: InstallState + ?Sized>(
        formula: &Formula,
        spec: &QuerySpec,
        install_state: &S,
    ) -> bool {
        if spec.installed_only && !install_state.is_installed(formula) {
            return false;
        }
        if spec.missing_only && install_state.any_version_installed(formula) {
            return false;
        }
        true
    }
}
